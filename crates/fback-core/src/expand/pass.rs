//! Single substitution passes over a candidate set.

use super::candidates::CandidateSet;
use super::placeholder::Placeholder;
use crate::url_model::UrlVars;

/// Replaces every static placeholder with its per-URL value. One output per
/// template; duplicates collapse.
pub fn substitute_static(templates: &[String], vars: &UrlVars) -> CandidateSet {
    templates
        .iter()
        .map(|template| {
            Placeholder::STATIC
                .iter()
                .fold(template.clone(), |acc, placeholder| {
                    match placeholder.static_value(vars) {
                        Some(value) if acc.contains(placeholder.token()) => {
                            acc.replace(placeholder.token(), value)
                        }
                        _ => acc,
                    }
                })
        })
        .collect()
}

/// Combinatorial pass for one token.
///
/// Candidates containing `token` emit one entry per value, in value order, with
/// every occurrence replaced by that same value. Other candidates pass through
/// once. With no values the set is returned untouched and the token stays
/// unresolved.
pub fn substitute_each(candidates: CandidateSet, token: &str, values: &[String]) -> CandidateSet {
    if values.is_empty() {
        return candidates;
    }

    let mut out = CandidateSet::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.contains(token) {
            for value in values {
                out.insert(candidate.replace(token, value));
            }
        } else {
            out.insert(candidate);
        }
    }
    out
}
