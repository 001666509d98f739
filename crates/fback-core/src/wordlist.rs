//! Plain-text list files: wordlists and URL lists, one entry per line.

use crate::error::PatternLoadError;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads a list file, stripping trailing whitespace from each line.
/// Blank lines are kept; an empty word is a valid substitution.
pub fn load_list(path: &Path) -> Result<Vec<String>, PatternLoadError> {
    let data = fs::read_to_string(path).map_err(|source| PatternLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&data))
}

/// Reads target URLs from a file, skipping blank lines.
pub fn load_urls(path: &Path) -> Result<Vec<String>, PatternLoadError> {
    let mut urls = load_list(path)?;
    urls.retain(|u| !u.trim().is_empty());
    Ok(urls)
}

/// Reads target URLs from a reader (standard input), skipping blank lines.
pub fn read_urls<R: Read>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    Ok(split_lines(&data)
        .into_iter()
        .filter(|u| !u.trim().is_empty())
        .collect())
}

fn split_lines(data: &str) -> Vec<String> {
    data.lines().map(|l| l.trim_end().to_string()).collect()
}
