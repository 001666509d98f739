//! On-disk fixtures for integration tests: template files and word lists.

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a fresh temp file. The file lives as long as the handle.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f.flush().expect("flush temp file");
    f
}

/// Template file with a single group holding `templates`.
pub fn patterns_file(templates: &[&str]) -> NamedTempFile {
    let json = serde_json::json!({ "test": templates });
    temp_file(&json.to_string())
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
