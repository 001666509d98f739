//! CLI for the fback wordlist generator.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_generate, run_man};

/// Top-level CLI. Without a subcommand, generates candidate backup URLs.
#[derive(Debug, Parser)]
#[command(name = "fback")]
#[command(about = "fback: generate candidate backup-file URLs for target sites", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Inputs of a generation run.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// File with target URLs, one per line. Required unless URLs are piped on stdin.
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// JSON template file [default: patterns_path from config, else res/patterns.json].
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub patterns: Option<PathBuf>,

    /// Also write results to this file.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wordlist for `$word`, one word per line [default: wordlist from config].
    #[arg(short = 'w', long = "wordlist", value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Substitute `$num` with 1..=N [default: number_count from config, 3].
    #[arg(short = 'n', long = "numbers", value_name = "N")]
    pub numbers: Option<usize>,

    /// Years for `%y`: START-END or a single value.
    #[arg(short = 'y', long = "yr", value_name = "RANGE", allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Months for `%m`: START-END or a single value.
    #[arg(short = 'm', long = "mr", value_name = "RANGE", allow_hyphen_values = true)]
    pub months: Option<String>,

    /// Days for `%d`: START-END or a single value.
    #[arg(short = 'd', long = "dr", value_name = "RANGE", allow_hyphen_values = true)]
    pub days: Option<String>,

    /// Output only the path/filename, without the scheme://domain prefix.
    #[arg(short = 'r', long = "relative")]
    pub relative: bool,

    /// Config file to use instead of ~/.config/fback/config.toml.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            Some(CliCommand::Completions { shell }) => run_completions(shell)?,
            Some(CliCommand::Man) => run_man()?,
            None => run_generate(&cli.generate)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
