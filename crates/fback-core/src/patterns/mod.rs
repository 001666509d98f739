//! Template store: loads the JSON template collection used by every URL.
//!
//! Group names are free-form and only organize the file; the engine sees the
//! flattened list in file order.

mod parse;

use crate::error::PatternLoadError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default template file location, relative to the working directory or the
/// directory holding the executable.
pub const DEFAULT_PATTERNS_PATH: &str = "res/patterns.json";

/// Reads and flattens a template file.
pub fn load_patterns(path: &Path) -> Result<Vec<String>, PatternLoadError> {
    let data = fs::read_to_string(path).map_err(|source| PatternLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: serde_json::Value =
        serde_json::from_str(&data).map_err(|source| PatternLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let templates = parse::flatten_groups(path, root)?;
    tracing::debug!(
        path = %path.display(),
        count = templates.len(),
        "loaded templates"
    );
    Ok(templates)
}

/// Resolves a relative template path: working directory first, then next to
/// the running executable. Absolute paths and misses are returned unchanged
/// so the load error names the path the user gave.
pub fn resolve_patterns_path(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_patterns_keeps_file_order() {
        let f = write_temp(
            r#"{
                "zeta": ["$word.$ext", "$domain_name.zip"],
                "alpha": ["backup_%y.tar.gz"],
                "mid": []
            }"#,
        );
        let templates = load_patterns(f.path()).unwrap();
        assert_eq!(
            templates,
            vec!["$word.$ext", "$domain_name.zip", "backup_%y.tar.gz"]
        );
    }

    #[test]
    fn load_patterns_missing_file() {
        let err = load_patterns(Path::new("/nonexistent/fback/patterns.json")).unwrap_err();
        assert!(matches!(err, PatternLoadError::Io { .. }));
    }

    #[test]
    fn load_patterns_invalid_json() {
        let f = write_temp("{ not json");
        assert!(matches!(
            load_patterns(f.path()).unwrap_err(),
            PatternLoadError::Json { .. }
        ));
    }

    #[test]
    fn load_patterns_top_level_array_rejected() {
        let f = write_temp(r#"["$word.zip"]"#);
        assert!(matches!(
            load_patterns(f.path()).unwrap_err(),
            PatternLoadError::NotAnObject { .. }
        ));
    }

    #[test]
    fn load_patterns_bad_group() {
        let f = write_temp(r#"{"ok": ["a"], "bad": "b"}"#);
        match load_patterns(f.path()).unwrap_err() {
            PatternLoadError::InvalidGroup { group, .. } => assert_eq!(group, "bad"),
            other => panic!("expected InvalidGroup, got {other:?}"),
        }

        let f = write_temp(r#"{"nums": ["a", 1]}"#);
        assert!(matches!(
            load_patterns(f.path()).unwrap_err(),
            PatternLoadError::InvalidGroup { .. }
        ));
    }

    #[test]
    fn resolve_keeps_existing_and_absolute_paths() {
        let f = write_temp("{}");
        assert_eq!(resolve_patterns_path(f.path()), f.path());
        let missing = Path::new("does/not/exist.json");
        assert_eq!(resolve_patterns_path(missing), missing);
    }

    #[test]
    fn resolve_falls_back_to_executable_dir() {
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        let f = tempfile::Builder::new()
            .prefix("fback-patterns-")
            .suffix(".json")
            .tempfile_in(&exe_dir)
            .unwrap();
        let name = Path::new(f.path().file_name().unwrap());
        assert!(!name.exists(), "name must not resolve from the working directory");

        assert_eq!(resolve_patterns_path(name), exe_dir.join(name));
    }
}
