//! Tag sets and tag usage summaries
//!
//! A [`TagList`] is an ordered, deduplicated set of non-empty tags. Every
//! mutation leaves the list sorted ascending, which lets membership checks
//! use a binary search.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sorted, deduplicated set of tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Create an empty tag list
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Add a tag after trimming whitespace.
    ///
    /// Empty tags and tags already present are ignored.
    pub fn append(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if let Err(idx) = self.search(tag) {
            self.tags.insert(idx, tag.to_string());
        }
    }

    /// Add every tag of a comma separated string
    pub fn append_from_delimited_string(&mut self, tags: &str) {
        for tag in tags.split(',') {
            self.append(tag);
        }
    }

    /// Remove a tag if present
    pub fn remove(&mut self, tag: &str) {
        if tag.is_empty() {
            return;
        }
        if let Ok(idx) = self.search(tag) {
            self.tags.remove(idx);
        }
    }

    /// Check for a single tag by exact match
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.search(tag).is_ok()
    }

    /// True if every queried tag is present.
    ///
    /// An empty query, or a query containing an empty tag, never matches.
    #[must_use]
    pub fn contains_all<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        if tags.is_empty() {
            return false;
        }
        tags.iter().all(|t| {
            let t = t.as_ref();
            !t.is_empty() && self.contains(t)
        })
    }

    /// True if at least one non-empty queried tag is present
    #[must_use]
    pub fn contains_any<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| {
            let t = t.as_ref();
            !t.is_empty() && self.contains(t)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.tags.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// One tag per line, as written into the interactive block
    #[must_use]
    pub fn multiline_string(&self) -> String {
        self.tags.join("\n")
    }

    fn search(&self, tag: &str) -> Result<usize, usize> {
        self.tags.binary_search_by(|probe| probe.as_str().cmp(tag))
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        tags.iter().map(String::as_str).collect()
    }
}

impl From<TagList> for Vec<String> {
    fn from(list: TagList) -> Self {
        list.tags
    }
}

impl<'a> FromIterator<&'a str> for TagList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for tag in iter {
            list.append(tag);
        }
        list
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(", "))
    }
}

/// Tag usage across a whole library
///
/// Derived on demand by [`BookmarkLibrary::all_tags`](super::BookmarkLibrary::all_tags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAggregate {
    /// Distinct tags in sorted order
    pub tags: TagList,
    /// Number of bookmarks carrying each tag
    pub counts: BTreeMap<String, usize>,
}

impl TagAggregate {
    /// Number of bookmarks using `tag` (zero if unknown)
    #[must_use]
    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Iterate `(tag, count)` pairs in tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tags.iter().map(|t| (t.as_str(), self.count(t)))
    }
}
