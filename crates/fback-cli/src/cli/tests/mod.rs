//! CLI parse tests.

use super::{Cli, CliCommand, GenerateArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn parse_generate(args: &[&str]) -> GenerateArgs {
    let cli = parse(args);
    assert!(cli.command.is_none(), "expected generation flags, got a subcommand");
    cli.generate
}

mod subcommands;
