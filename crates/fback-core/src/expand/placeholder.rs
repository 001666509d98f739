//! Placeholder vocabulary.

use crate::url_model::UrlVars;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    DomainName,
    Subdomain,
    Tld,
    FullDomain,
    Path,
    FullPath,
    FileName,
    Word,
    Ext,
    Num,
    BackupExt,
    CompressionExt,
    Year,
    Month,
    Day,
}

impl Placeholder {
    /// Static placeholders, in substitution order.
    pub const STATIC: [Placeholder; 7] = [
        Placeholder::DomainName,
        Placeholder::Subdomain,
        Placeholder::Tld,
        Placeholder::FullDomain,
        Placeholder::Path,
        Placeholder::FullPath,
        Placeholder::FileName,
    ];

    /// Literal token as written in templates.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::DomainName => "$domain_name",
            Placeholder::Subdomain => "$subdomain",
            Placeholder::Tld => "$tld",
            Placeholder::FullDomain => "$full_domain",
            Placeholder::Path => "$path",
            Placeholder::FullPath => "$full_path",
            Placeholder::FileName => "$file_name",
            Placeholder::Word => "$word",
            Placeholder::Ext => "$ext",
            Placeholder::Num => "$num",
            Placeholder::BackupExt => "$b_ext",
            Placeholder::CompressionExt => "$c_ext",
            Placeholder::Year => "%y",
            Placeholder::Month => "%m",
            Placeholder::Day => "%d",
        }
    }

    /// Per-URL value for a static placeholder; `None` for dynamic ones.
    pub fn static_value(self, vars: &UrlVars) -> Option<&str> {
        let v = match self {
            Placeholder::DomainName => &vars.domain_name,
            Placeholder::Subdomain => &vars.subdomain,
            Placeholder::Tld => &vars.tld,
            Placeholder::FullDomain => &vars.full_domain,
            Placeholder::Path => &vars.path,
            Placeholder::FullPath => &vars.full_path,
            Placeholder::FileName => &vars.file_name,
            _ => return None,
        };
        Some(v.as_str())
    }
}

/// True if `entry` still carries a placeholder marker (`$` or `%`).
pub fn has_unresolved_marker(entry: &str) -> bool {
    entry.contains(['$', '%'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tokens_do_not_overlap() {
        // Literal replacement relies on no token being a substring of another.
        let all: Vec<&str> = Placeholder::STATIC.iter().map(|p| p.token()).collect();
        for a in &all {
            for b in &all {
                if a != b {
                    assert!(!b.contains(*a), "{a} is inside {b}");
                }
            }
        }
        assert!(!Placeholder::BackupExt.token().contains(Placeholder::Ext.token()));
        assert!(!Placeholder::CompressionExt.token().contains(Placeholder::Ext.token()));
    }

    #[test]
    fn dynamic_placeholders_have_no_static_value() {
        let vars = UrlVars::from_url("https://example.com/").unwrap();
        assert_eq!(Placeholder::Word.static_value(&vars), None);
        assert_eq!(Placeholder::Year.static_value(&vars), None);
        assert_eq!(Placeholder::Tld.static_value(&vars), Some("com"));
    }

    #[test]
    fn unresolved_markers() {
        assert!(has_unresolved_marker("backup_%y.zip"));
        assert!(has_unresolved_marker("site.$b_ext"));
        assert!(!has_unresolved_marker("https://example.com/backup.zip"));
    }
}
