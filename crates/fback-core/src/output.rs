//! Newline-delimited result writers.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one entry per line. Returns the number of lines written.
pub fn write_lines<'a, W, I>(writer: W, entries: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    let mut w = BufWriter::new(writer);
    let mut count = 0usize;
    for entry in entries {
        w.write_all(entry.as_bytes())?;
        w.write_all(b"\n")?;
        count += 1;
    }
    w.flush()?;
    Ok(count)
}

/// Creates (or truncates) `path` and writes the entries to it.
pub fn write_to_file<'a, I>(path: &Path, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let count = write_lines(f, entries).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), count, "wrote results");
    Ok(count)
}
