//! URL decomposition into template variables.
//!
//! Splits a target URL into the values bound to the static placeholders
//! (`$domain_name`, `$subdomain`, `$tld`, `$full_domain`, `$path`,
//! `$full_path`, `$file_name`) plus the scheme used to prefix results.

mod host;
mod path;

pub use host::{split_host, HostParts};
pub use path::{directory_of, file_name_of, raw_path};

use crate::error::UrlParseError;
use url::{Host, Url};

/// Per-URL variable set. Built once per input URL and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlVars {
    pub scheme: String,
    pub domain_name: String,
    pub subdomain: String,
    pub tld: String,
    pub full_domain: String,
    pub path: String,
    pub full_path: String,
    pub file_name: String,
}

impl UrlVars {
    /// Decomposes `raw` into its template variables.
    ///
    /// # Examples
    ///
    /// - `https://sub.example.com/app/` → full_domain `sub.example.com`, path `/app`
    /// - `http://example.co.uk/site.php` → tld `co.uk`, file_name `site.php`
    pub fn from_url(raw: &str) -> Result<Self, UrlParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(UrlParseError::Empty);
        }

        let parsed = Url::parse(raw).map_err(|e| UrlParseError::Invalid {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        let parts = match parsed.host() {
            Some(Host::Domain(domain)) => split_host(domain.trim_end_matches('.')),
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => HostParts {
                subdomain: String::new(),
                // host_str keeps the brackets around IPv6 literals
                domain_name: parsed.host_str().unwrap_or_default().to_string(),
                tld: String::new(),
            },
            None => return Err(UrlParseError::MissingHost(raw.to_string())),
        };

        let full_domain = [
            parts.subdomain.as_str(),
            parts.domain_name.as_str(),
            parts.tld.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".");

        // `Url::path` percent-encodes and drops dot segments; keep what was typed
        let full_path = match raw_path(raw) {
            "" => "/",
            p => p,
        };

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            full_domain,
            path: directory_of(full_path).to_string(),
            file_name: file_name_of(full_path).to_string(),
            full_path: full_path.to_string(),
            domain_name: parts.domain_name,
            subdomain: parts.subdomain,
            tld: parts.tld,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_subdomain_directory() {
        let v = UrlVars::from_url("https://sub.example.com/app/").unwrap();
        assert_eq!(v.scheme, "https");
        assert_eq!(v.subdomain, "sub");
        assert_eq!(v.domain_name, "example");
        assert_eq!(v.tld, "com");
        assert_eq!(v.full_domain, "sub.example.com");
        assert_eq!(v.path, "/app");
        assert_eq!(v.full_path, "/app/");
        assert_eq!(v.file_name, "");
    }

    #[test]
    fn decompose_file_url() {
        let v = UrlVars::from_url("http://www.example.co.uk/blog/site.php?x=1").unwrap();
        assert_eq!(v.scheme, "http");
        assert_eq!(v.subdomain, "www");
        assert_eq!(v.domain_name, "example");
        assert_eq!(v.tld, "co.uk");
        assert_eq!(v.full_domain, "www.example.co.uk");
        assert_eq!(v.path, "/blog");
        assert_eq!(v.full_path, "/blog/site.php");
        assert_eq!(v.file_name, "site.php");
    }

    #[test]
    fn decompose_bare_host() {
        let v = UrlVars::from_url("https://example.com").unwrap();
        assert_eq!(v.full_domain, "example.com");
        assert_eq!(v.path, "/");
        assert_eq!(v.full_path, "/");
        assert_eq!(v.file_name, "");
    }

    #[test]
    fn decompose_ip_host() {
        let v = UrlVars::from_url("http://10.0.0.1:8080/admin/").unwrap();
        assert_eq!(v.domain_name, "10.0.0.1");
        assert_eq!(v.full_domain, "10.0.0.1");
        assert!(v.tld.is_empty());
        assert!(v.subdomain.is_empty());
    }

    #[test]
    fn decompose_ipv6_host() {
        let v = UrlVars::from_url("http://[::1]:8080/admin/").unwrap();
        assert_eq!(v.domain_name, "[::1]");
        assert_eq!(v.full_domain, "[::1]");
        assert!(v.tld.is_empty());
        assert!(v.subdomain.is_empty());
        assert_eq!(v.path, "/admin");
    }

    #[test]
    fn decompose_keeps_raw_path() {
        let v = UrlVars::from_url("https://example.com/My Site/über/a/../index.php").unwrap();
        assert_eq!(v.full_path, "/My Site/über/a/../index.php");
        assert_eq!(v.path, "/My Site/über/a/..");
        assert_eq!(v.file_name, "index.php");

        let v = UrlVars::from_url("https://example.com/a%20b/c.php#top").unwrap();
        assert_eq!(v.full_path, "/a%20b/c.php");
    }

    #[test]
    fn decompose_failures() {
        assert_eq!(UrlVars::from_url(""), Err(UrlParseError::Empty));
        assert_eq!(UrlVars::from_url("   "), Err(UrlParseError::Empty));
        assert!(matches!(
            UrlVars::from_url("example.com/path"),
            Err(UrlParseError::Invalid { .. })
        ));
        assert!(matches!(
            UrlVars::from_url("mailto:admin@example.com"),
            Err(UrlParseError::MissingHost(_))
        ));
    }
}
