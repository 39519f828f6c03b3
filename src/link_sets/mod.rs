use std::collections::HashSet;

use serde::{Serialize, Serializer};

mod transform;

pub use transform::{export_csv, render_chart, render_listing, write_csv, ExportError};

/// A set of URLs, unique by exact string equality, that remembers insertion
/// order so the crawl can walk it while it is still growing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl LinkSet {
    pub fn new() -> Self {
        LinkSet::default()
    }

    /// Returns `false` when the URL was already present.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.members.contains(url) {
            return false;
        }
        self.members.insert(url.to_string());
        self.order.push(url.to_string());
        true
    }

    pub fn remove(&mut self, url: &str) -> bool {
        if !self.members.remove(url) {
            return false;
        }
        self.order.retain(|member| member != url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.members.contains(url)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(|url| url.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|url| url.as_str())
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

impl<'a> FromIterator<&'a str> for LinkSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = LinkSet::new();
        for url in iter {
            set.insert(url);
        }
        set
    }
}

impl Serialize for LinkSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_dedups_by_exact_string() {
        let mut set = LinkSet::new();
        assert!(set.insert("https://x.com/a"));
        assert!(!set.insert("https://x.com/a"));
        assert!(set.insert("https://x.com/a/"));
        assert!(set.insert("HTTPS://x.com/a"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let set = LinkSet::from_iter(["c", "a", "b", "a"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(set.get(1), Some("a"));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut set = LinkSet::from_iter(["a", "b", "c"]);
        assert!(set.remove("b"));
        assert!(!set.remove("b"));
        assert!(!set.contains("b"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = LinkSet::from_iter(["a", "b"]);
        set.clear();
        assert!(set.is_empty());
        assert!(set.insert("a"));
    }

    #[test]
    fn serializes_as_a_list() {
        let set = LinkSet::from_iter(["b", "a"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["b","a"]"#);
    }
}
