//! Public-suffix aware host splitting.

/// Host split into subdomain, registrable label and public suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    pub subdomain: String,
    pub domain_name: String,
    pub tld: String,
}

/// Splits a domain host using the public suffix list.
///
/// `www.example.co.uk` → (`www`, `example`, `co.uk`). Hosts without a
/// registrable domain (`localhost`, a bare suffix) come back whole as
/// `domain_name` with empty subdomain and suffix.
pub fn split_host(host: &str) -> HostParts {
    let whole = || HostParts {
        subdomain: String::new(),
        domain_name: host.to_string(),
        tld: String::new(),
    };

    let (Some(registrable), Some(suffix)) = (psl::domain_str(host), psl::suffix_str(host)) else {
        return whole();
    };

    let Some(domain_name) = registrable
        .strip_suffix(suffix)
        .and_then(|d| d.strip_suffix('.'))
        .filter(|d| !d.is_empty())
    else {
        return whole();
    };

    let subdomain = host
        .strip_suffix(registrable)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or("");

    HostParts {
        subdomain: subdomain.to_string(),
        domain_name: domain_name.to_string(),
        tld: suffix.to_string(),
    }
}
