//! Result normalization: slash collapsing and absolute/relative output.

/// Collapses every run of `/` into a single `/`.
pub fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Normalizes one expanded template.
///
/// Slashes are collapsed on the raw template result, before any prefix is
/// added, so the `scheme://` separator is never touched.
pub fn normalize_entry(candidate: &str, scheme: &str, full_domain: &str, relative: bool) -> String {
    let path = collapse_slashes(candidate);
    if relative {
        return path.trim_start_matches('/').to_string();
    }
    let sep = if path.starts_with('/') { "" } else { "/" };
    format!("{scheme}://{full_domain}{sep}{path}")
}

/// Normalizes every candidate. Output keeps input order.
pub fn normalize<I, S>(candidates: I, scheme: &str, full_domain: &str, relative: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .map(|c| normalize_entry(c.as_ref(), scheme, full_domain, relative))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs() {
        assert_eq!(collapse_slashes("//a///b/c.zip"), "/a/b/c.zip");
        assert_eq!(collapse_slashes("a/b"), "a/b");
        assert_eq!(collapse_slashes(""), "");
    }

    #[test]
    fn absolute_adds_single_leading_slash() {
        assert_eq!(
            normalize_entry("backup.zip", "https", "example.com", false),
            "https://example.com/backup.zip"
        );
        assert_eq!(
            normalize_entry("//app//backup.zip", "https", "example.com", false),
            "https://example.com/app/backup.zip"
        );
    }

    #[test]
    fn relative_strips_leading_slashes() {
        assert_eq!(
            normalize_entry("///app/db.sql", "https", "example.com", true),
            "app/db.sql"
        );
        assert_eq!(normalize_entry("db.sql", "http", "example.com", true), "db.sql");
    }

    #[test]
    fn relative_never_has_scheme_prefix() {
        let out = normalize(["/a.zip", "b.zip", "//c/d.zip"], "https", "example.com", true);
        assert!(out.iter().all(|e| !e.contains("https://")));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["//app//x.zip", "a/b", "/", "x"] {
            let once = normalize_entry(raw, "https", "example.com", true);
            let twice = normalize_entry(&once, "https", "example.com", true);
            assert_eq!(once, twice);

            let path_once = collapse_slashes(raw);
            assert_eq!(collapse_slashes(&path_once), path_once);
        }
    }
}
