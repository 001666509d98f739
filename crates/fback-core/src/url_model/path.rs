//! Path extraction from a URL and its directory and file-name parts.

/// Path of `url` exactly as written: after `scheme://authority`, before any
/// `?` or `#`. No percent-encoding and no dot-segment resolution. Empty when
/// the URL has no path.
pub fn raw_path(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => return "",
    };
    let rest = match rest.find(['?', '#']) {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "",
    }
}

/// Directory portion of `path` with POSIX `dirname` semantics:
/// `/a/b.php` → `/a`, `/app/` → `/app`, `/x` → `/`, `` → ``.
pub fn directory_of(path: &str) -> &str {
    let head = match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => return "",
    };
    if head.bytes().all(|b| b == b'/') {
        head
    } else {
        head.trim_end_matches('/')
    }
}

/// Last path segment when it looks like a file (contains a `.`), else empty.
pub fn file_name_of(path: &str) -> &str {
    let last = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    if last.contains('.') {
        last
    } else {
        ""
    }
}
