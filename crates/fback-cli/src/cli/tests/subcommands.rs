//! Tests for completions and man.

use super::{parse, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_completions() {
    match parse(&["fback", "completions", "bash"]).command {
        Some(CliCommand::Completions { shell }) => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["fback", "man"]).command {
        Some(CliCommand::Man) => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_subcommand_conflicts_with_generation_flags() {
    assert!(crate::cli::Cli::try_parse_from(["fback", "-r", "man"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    crate::cli::Cli::command().debug_assert();
}
