//! Template expansion engine.
//!
//! Applies the static (per-URL) substitutions and then the combinatorial
//! passes in a fixed order:
//!
//! 1. static placeholders (`$domain_name`, `$path`, ...)
//! 2. `$word` against the wordlist
//! 3. `$ext` against backup then compression extensions
//! 4. `$num` against `1..=n`
//! 5. `%y`, `%m`, `%d`, each only when its range is non-empty
//! 6. `$b_ext` / `$c_ext`, each only when some candidate still uses it
//!
//! Every pass deduplicates. The order decides which combinations exist (a word
//! containing `$ext` is expanded by the extension pass, not the other way
//! round) and must not change.

mod candidates;
mod pass;
mod placeholder;

pub use candidates::CandidateSet;
pub use pass::{substitute_each, substitute_static};
pub use placeholder::{has_unresolved_marker, Placeholder};

use crate::extensions;
use crate::range;
use crate::url_model::UrlVars;

/// Candidate count above which a pass logs a warning.
pub const DEFAULT_WARN_THRESHOLD: usize = 1_000_000;

/// Value lists bound to the dynamic placeholders. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLists {
    pub words: Vec<String>,
    pub backup_exts: Vec<String>,
    pub compression_exts: Vec<String>,
    pub numbers: Vec<String>,
    pub years: Vec<String>,
    pub months: Vec<String>,
    pub days: Vec<String>,
}

impl ValueLists {
    /// Built-in extension vocabularies, numbers `1..=3`, no date ranges.
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            backup_exts: extensions::backup_extensions(),
            compression_exts: extensions::compression_extensions(),
            numbers: range::number_range(3),
            years: Vec::new(),
            months: Vec::new(),
            days: Vec::new(),
        }
    }

    /// Values for `$ext`: backup extensions followed by compression extensions.
    pub fn extensions(&self) -> Vec<String> {
        self.backup_exts
            .iter()
            .chain(&self.compression_exts)
            .cloned()
            .collect()
    }
}

/// Runs the pass sequence for one URL.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    lists: &'a ValueLists,
    warn_threshold: usize,
}

impl<'a> Expander<'a> {
    pub fn new(lists: &'a ValueLists) -> Self {
        Self {
            lists,
            warn_threshold: DEFAULT_WARN_THRESHOLD,
        }
    }

    pub fn with_warn_threshold(mut self, warn_threshold: usize) -> Self {
        self.warn_threshold = warn_threshold;
        self
    }

    pub fn expand(&self, templates: &[String], vars: &UrlVars) -> CandidateSet {
        let lists = self.lists;

        let set = substitute_static(templates, vars);
        let set = self.pass(set, Placeholder::Word, &lists.words);
        let set = self.pass(set, Placeholder::Ext, &lists.extensions());
        let mut set = self.pass(set, Placeholder::Num, &lists.numbers);

        for (placeholder, values) in [
            (Placeholder::Year, &lists.years),
            (Placeholder::Month, &lists.months),
            (Placeholder::Day, &lists.days),
        ] {
            if !values.is_empty() {
                set = self.pass(set, placeholder, values);
            }
        }

        for (placeholder, values) in [
            (Placeholder::BackupExt, &lists.backup_exts),
            (Placeholder::CompressionExt, &lists.compression_exts),
        ] {
            if set.any_contains(placeholder.token()) {
                set = self.pass(set, placeholder, values);
            }
        }

        set
    }

    fn pass(&self, set: CandidateSet, placeholder: Placeholder, values: &[String]) -> CandidateSet {
        let before = set.len();
        let out = substitute_each(set, placeholder.token(), values);
        tracing::trace!(
            token = placeholder.token(),
            before,
            after = out.len(),
            "substitution pass"
        );
        if out.len() > self.warn_threshold {
            tracing::warn!(
                token = placeholder.token(),
                candidates = out.len(),
                threshold = self.warn_threshold,
                "expansion is growing large"
            );
        }
        out
    }
}

/// Expands `templates` for one URL with the default warning threshold.
pub fn expand(templates: &[String], vars: &UrlVars, lists: &ValueLists) -> CandidateSet {
    Expander::new(lists).expand(templates, vars)
}
