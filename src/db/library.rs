//! The in-memory bookmark collection
//!
//! [`BookmarkLibrary`] owns every bookmark loaded from one bookmark file and
//! keeps them in ascending number order. Bookmark numbers are unique; URLs are
//! unique as well unless the library was created with `unique_urls = false`.
//! Both invariants are checked by [`BookmarkLibrary::verify`], which must pass
//! before the library is saved or handed to an editor.

use super::bookmark::{Bookmark, DEFAULT_TITLE};
use super::error::DbError;
use super::tags::TagAggregate;
use super::url::BookmarkUrl;
use std::collections::BTreeMap;

/// Ordered collection of bookmarks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkLibrary {
    bookmarks: Vec<Bookmark>,
    unique_urls: bool,
}

impl Default for BookmarkLibrary {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BookmarkLibrary {
    /// Create an empty library
    #[must_use]
    pub const fn new(unique_urls: bool) -> Self {
        Self {
            bookmarks: Vec::new(),
            unique_urls,
        }
    }

    /// Build a library from loaded bookmarks, sorting them by number.
    ///
    /// The result is not verified; call [`verify`](Self::verify) before use.
    #[must_use]
    pub fn from_bookmarks(mut bookmarks: Vec<Bookmark>, unique_urls: bool) -> Self {
        bookmarks.sort_by_key(Bookmark::id);
        Self {
            bookmarks,
            unique_urls,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    #[must_use]
    pub const fn unique_urls(&self) -> bool {
        self.unique_urls
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    #[must_use]
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Create a bookmark with the next free number and return that number.
    ///
    /// The new entry is titled "Untitled" and points at `about:blank` until the
    /// caller fills it in through [`get_by_id_mut`](Self::get_by_id_mut).
    pub fn new_entry(&mut self) -> u64 {
        let id = self.bookmarks.iter().map(Bookmark::id).max().unwrap_or(0) + 1;

        let mut bookmark = Bookmark::new(id, BookmarkUrl::default());
        DEFAULT_TITLE.clone_into(&mut bookmark.title);

        // id is larger than every existing number, so order is preserved
        self.bookmarks.push(bookmark);
        id
    }

    /// Look up a bookmark by number
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if no bookmark has this number.
    pub fn get_by_id(&self, id: u64) -> Result<&Bookmark, DbError> {
        let idx = self.search(id)?;
        Ok(&self.bookmarks[idx])
    }

    /// Look up a bookmark by number for modification
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if no bookmark has this number.
    pub fn get_by_id_mut(&mut self, id: u64) -> Result<&mut Bookmark, DbError> {
        let idx = self.search(id)?;
        Ok(&mut self.bookmarks[idx])
    }

    /// Remove a bookmark by number, returning it
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if no bookmark has this number; the
    /// library is left unchanged.
    pub fn delete_by_id(&mut self, id: u64) -> Result<Bookmark, DbError> {
        let idx = self.search(id)?;
        Ok(self.bookmarks.remove(idx))
    }

    /// Check the uniqueness invariants.
    ///
    /// Numbers are checked first, then URLs when URL uniqueness is enforced.
    /// The smallest offending value is reported.
    ///
    /// # Errors
    ///
    /// Returns `DbError::DuplicateId` or `DbError::DuplicateUrl` naming the
    /// repeated value and how often it occurs.
    pub fn verify(&self) -> Result<(), DbError> {
        let mut id_counts: BTreeMap<u64, usize> = BTreeMap::new();
        for bm in &self.bookmarks {
            *id_counts.entry(bm.id()).or_default() += 1;
        }
        if let Some((&id, &count)) = id_counts.iter().find(|(_, c)| **c > 1) {
            return Err(DbError::DuplicateId { id, count });
        }

        if self.unique_urls {
            let mut url_counts: BTreeMap<&str, usize> = BTreeMap::new();
            for bm in &self.bookmarks {
                *url_counts.entry(bm.url.as_str()).or_default() += 1;
            }
            if let Some((url, &count)) = url_counts.iter().find(|(_, c)| **c > 1) {
                return Err(DbError::DuplicateUrl {
                    url: (*url).to_string(),
                    count,
                });
            }
        }

        Ok(())
    }

    /// Every tag in the library with the number of bookmarks using it
    #[must_use]
    pub fn all_tags(&self) -> TagAggregate {
        let mut aggregate = TagAggregate::default();
        for tag in self.bookmarks.iter().flat_map(|bm| bm.tags.iter()) {
            aggregate.tags.append(tag);
            *aggregate.counts.entry(tag.clone()).or_default() += 1;
        }
        aggregate
    }

    /// Number of the bookmark that has gone longest without an update.
    ///
    /// Ties go to the lowest number. Returns `None` for an empty library.
    #[must_use]
    pub fn least_recently_updated(&self) -> Option<u64> {
        self.bookmarks
            .iter()
            .min_by_key(|bm| (bm.updated_at(), bm.id()))
            .map(Bookmark::id)
    }

    fn search(&self, id: u64) -> Result<usize, DbError> {
        self.bookmarks
            .binary_search_by_key(&id, Bookmark::id)
            .map_err(|_| DbError::NotFound(id))
    }
}

impl<'a> IntoIterator for &'a BookmarkLibrary {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.bookmarks.iter()
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod library_tests;
