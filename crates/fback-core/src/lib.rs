//! Core of the fback backup-file wordlist generator.
//!
//! Templates such as `$full_domain$path/$word.$ext` are expanded against the
//! variables of each target URL and a set of value lists, then normalized into
//! candidate URLs (or relative paths).

pub mod config;
pub mod error;
pub mod logging;

pub mod expand;
pub mod extensions;
pub mod generator;
pub mod normalize;
pub mod output;
pub mod patterns;
pub mod range;
pub mod url_model;
pub mod wordlist;

pub use error::{InvalidRangeError, PatternLoadError, UrlParseError};
pub use expand::{expand, CandidateSet, ValueLists};
pub use generator::{Generation, Generator};
