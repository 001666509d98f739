//! Error types for loading inputs, parsing ranges and decomposing URLs.

use std::path::PathBuf;

/// Template or list file could not be loaded. Fatal: raised before any URL is processed.
#[derive(Debug, thiserror::Error)]
pub enum PatternLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: top-level value must be an object of template arrays", .path.display())]
    NotAnObject { path: PathBuf },
    #[error("{}: group '{group}' must be an array of strings", .path.display())]
    InvalidGroup { path: PathBuf, group: String },
}

/// Range argument is neither a literal nor a `start-end` pair of integers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid range '{input}': expected a literal or START-END with integer bounds")]
pub struct InvalidRangeError {
    pub input: String,
}

/// A single URL could not be split into its template variables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlParseError {
    #[error("empty url")]
    Empty,
    #[error("invalid url '{url}': {reason}")]
    Invalid { url: String, reason: String },
    #[error("url '{0}' has no host")]
    MissingHost(String),
}
