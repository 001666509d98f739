//! Insertion-ordered, exact-match deduplicating string set.

use indexmap::IndexSet;

/// Each entry is stored once; lookup and order share the same table.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    items: IndexSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: IndexSet::with_capacity(capacity),
        }
    }

    /// Adds `entry` unless already present. Returns true if it was new.
    pub fn insert(&mut self, entry: String) -> bool {
        self.items.insert(entry)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.items.contains(entry)
    }

    /// True if any entry contains `token` as a substring.
    pub fn any_contains(&self, token: &str) -> bool {
        self.items.iter().any(|e| e.contains(token))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items.into_iter().collect()
    }
}

impl Extend<String> for CandidateSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_appearance() {
        let set: CandidateSet = ["b", "a", "b", "c", "a"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = CandidateSet::new();
        assert!(set.insert("x".to_string()));
        assert!(!set.insert("x".to_string()));
        assert!(set.contains("x"));
        assert!(!set.contains("y"));
    }

    #[test]
    fn extend_skips_existing_entries() {
        let mut set: CandidateSet = ["a", "b"].into_iter().map(String::from).collect();
        set.extend(["b", "c", "a", "d"].into_iter().map(String::from));
        assert_eq!(set.into_vec(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn any_contains_substring() {
        let set: CandidateSet = ["a.$b_ext", "b.zip"].into_iter().map(String::from).collect();
        assert!(set.any_contains("$b_ext"));
        assert!(!set.any_contains("$c_ext"));
        assert!(!CandidateSet::new().any_contains("$b_ext"));
    }
}
