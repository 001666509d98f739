//! Run-level orchestration: expand every target URL and merge the results.

use crate::error::UrlParseError;
use crate::expand::{has_unresolved_marker, CandidateSet, Expander, ValueLists, DEFAULT_WARN_THRESHOLD};
use crate::normalize::normalize;
use crate::url_model::UrlVars;

/// A target URL that could not be decomposed and was left out of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUrl {
    pub url: String,
    pub error: UrlParseError,
}

/// Merged output of a run.
#[derive(Debug, Default)]
pub struct Generation {
    results: CandidateSet,
    skipped: Vec<SkippedUrl>,
}

impl Generation {
    /// Entries with every placeholder substituted, in first-appearance order.
    pub fn resolved(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter(|e| !has_unresolved_marker(e))
    }

    /// All merged entries, including ones that still carry `$` or `%`.
    pub fn all(&self) -> &CandidateSet {
        &self.results
    }

    pub fn skipped(&self) -> &[SkippedUrl] {
        &self.skipped
    }
}

/// Holds the run-wide inputs: templates and value lists are read-only and
/// shared by every URL.
#[derive(Debug, Clone)]
pub struct Generator {
    templates: Vec<String>,
    lists: ValueLists,
    relative: bool,
    warn_threshold: usize,
}

impl Generator {
    pub fn new(templates: Vec<String>, lists: ValueLists) -> Self {
        Self {
            templates,
            lists,
            relative: false,
            warn_threshold: DEFAULT_WARN_THRESHOLD,
        }
    }

    /// Emit bare paths instead of `scheme://domain/path`.
    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    pub fn warn_threshold(mut self, warn_threshold: usize) -> Self {
        self.warn_threshold = warn_threshold;
        self
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn lists(&self) -> &ValueLists {
        &self.lists
    }

    /// Expands and normalizes all templates for a single URL.
    pub fn generate_for_url(&self, url: &str) -> Result<Vec<String>, UrlParseError> {
        let vars = UrlVars::from_url(url)?;
        let expanded = Expander::new(&self.lists)
            .with_warn_threshold(self.warn_threshold)
            .expand(&self.templates, &vars);
        Ok(normalize(
            expanded,
            &vars.scheme,
            &vars.full_domain,
            self.relative,
        ))
    }

    /// Processes `urls` in order. URLs that fail to decompose are skipped and
    /// reported; the rest are merged into one deduplicated set.
    pub fn generate<I, S>(&self, urls: I) -> Generation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut generation = Generation::default();
        for url in urls {
            let url = url.as_ref();
            match self.generate_for_url(url) {
                Ok(entries) => {
                    let before = generation.results.len();
                    generation.results.extend(entries);
                    tracing::debug!(
                        url,
                        added = generation.results.len() - before,
                        "expanded url"
                    );
                }
                Err(error) => {
                    tracing::warn!(url, %error, "skipping url");
                    generation.skipped.push(SkippedUrl {
                        url: url.to_string(),
                        error,
                    });
                }
            }
        }
        tracing::info!(
            total = generation.results.len(),
            skipped = generation.skipped.len(),
            "generation finished"
        );
        generation
    }
}
