//! Default command: expand templates for every target URL and print the results.

use anyhow::{bail, Context, Result};
use fback_core::config::{self, FbackConfig};
use fback_core::expand::ValueLists;
use fback_core::generator::Generator;
use fback_core::output;
use fback_core::patterns::{self, DEFAULT_PATTERNS_PATH};
use fback_core::range::{expand_range, number_range};
use fback_core::wordlist;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use crate::cli::GenerateArgs;

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);

    let generator = build_generator(args, &cfg)?;
    let urls = read_target_urls(args.list.as_deref())?;
    tracing::info!(
        urls = urls.len(),
        templates = generator.templates().len(),
        "starting generation"
    );

    let generation = generator.generate(&urls);
    for skipped in generation.skipped() {
        eprintln!("fback: skipping '{}': {}", skipped.url, skipped.error);
    }

    if let Some(path) = &args.output {
        output::write_to_file(path, generation.resolved())?;
    }

    match output::write_lines(io::stdout().lock(), generation.resolved()) {
        Ok(count) => tracing::info!(count, "printed results"),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before all results were written")
        }
        Err(e) => return Err(e).context("write results to stdout"),
    }
    Ok(())
}

/// Loads templates and value lists. Flags win over config, config over built-ins.
pub fn build_generator(args: &GenerateArgs, cfg: &FbackConfig) -> Result<Generator> {
    let patterns_path = args
        .patterns
        .clone()
        .or_else(|| cfg.patterns_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATTERNS_PATH));
    let templates = patterns::load_patterns(&patterns::resolve_patterns_path(&patterns_path))?;

    let words = match &args.wordlist {
        Some(path) => wordlist::load_list(path)?,
        None => cfg.wordlist.clone(),
    };

    let mut lists = ValueLists::new(words);
    lists.numbers = number_range(args.numbers.unwrap_or(cfg.number_count));
    lists.years = expand_range(args.years.as_deref()).context("year range (--yr)")?;
    lists.months = expand_range(args.months.as_deref()).context("month range (--mr)")?;
    lists.days = expand_range(args.days.as_deref()).context("day range (--dr)")?;

    Ok(Generator::new(templates, lists)
        .relative(args.relative)
        .warn_threshold(cfg.expansion_warn_threshold))
}

/// URLs from `-l FILE`, or from stdin when it is not a terminal.
fn read_target_urls(list: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = list {
        return Ok(wordlist::load_urls(path)?);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no target URLs: pass -l/--list <FILE> or pipe URLs on standard input");
    }
    wordlist::read_urls(stdin.lock()).context("read URLs from standard input")
}
