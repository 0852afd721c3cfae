//! Bookmark query engine
//!
//! A query is a list of independent predicates, each of which is only
//! consulted when the user asked for it. A bookmark is included when every
//! active predicate accepts it; with no active predicates everything matches.
//!
//! # Examples
//!
//! ```
//! use markr::db::BookmarkLibrary;
//! use markr::filters::{BookmarkQuery, FilterSet};
//!
//! let library = BookmarkLibrary::default();
//! let query = BookmarkQuery {
//!     tags: Some(vec!["news".to_string()]),
//!     ..Default::default()
//! };
//!
//! let matches = FilterSet::from_query(&query).apply(&library);
//! assert!(matches.is_empty());
//! ```

use crate::db::{Bookmark, BookmarkLibrary};

/// Search options as given on the command line
///
/// `None` means the option was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkQuery {
    /// Exact bookmark number
    pub id: Option<u64>,
    /// Bookmark must carry all of these tags
    pub tags: Option<Vec<String>>,
    /// Substring of the title
    pub name: Option<String>,
    /// Substring of the URL
    pub url: Option<String>,
    /// Substring of the description
    pub description: Option<String>,
}

impl BookmarkQuery {
    /// Whether any option was given
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.tags.is_none()
            && self.name.is_none()
            && self.url.is_none()
            && self.description.is_none()
    }
}

type Predicate<'q> = Box<dyn Fn(&Bookmark) -> bool + 'q>;

/// One predicate and whether the user cares about it
pub struct FilterCase<'q> {
    active: bool,
    predicate: Predicate<'q>,
}

impl<'q> FilterCase<'q> {
    pub fn new(active: bool, predicate: impl Fn(&Bookmark) -> bool + 'q) -> Self {
        Self {
            active,
            predicate: Box::new(predicate),
        }
    }

    /// A case built from an optional value: active only when the value is set
    pub fn from_option<T: 'q>(value: Option<T>, predicate: impl Fn(&T, &Bookmark) -> bool + 'q) -> Self {
        match value {
            Some(value) => Self::new(true, move |bm| predicate(&value, bm)),
            None => Self::new(false, |_| true),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// AND-combination of filter cases
#[derive(Default)]
pub struct FilterSet<'q> {
    cases: Vec<FilterCase<'q>>,
}

impl<'q> FilterSet<'q> {
    #[must_use]
    pub const fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Add a case
    #[must_use]
    pub fn with_case(mut self, case: FilterCase<'q>) -> Self {
        self.cases.push(case);
        self
    }

    /// Build the standard cases for a query: number, tags, name, URL and
    /// description
    #[must_use]
    pub fn from_query(query: &'q BookmarkQuery) -> Self {
        Self::new()
            .with_case(FilterCase::from_option(query.id, |id, bm| bm.id() == *id))
            .with_case(FilterCase::from_option(query.tags.as_ref(), |tags, bm| {
                bm.tags.contains_all(tags.as_slice())
            }))
            .with_case(FilterCase::from_option(query.name.as_deref(), |name, bm| {
                bm.matches_name(name)
            }))
            .with_case(FilterCase::from_option(query.url.as_deref(), |url, bm| {
                bm.matches_url(url)
            }))
            .with_case(FilterCase::from_option(
                query.description.as_deref(),
                |desc, bm| bm.matches_description(desc),
            ))
    }

    /// Number of cases the user asked for
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cases.iter().filter(|c| c.active).count()
    }

    /// Whether `bookmark` passes every active case
    #[must_use]
    pub fn include(&self, bookmark: &Bookmark) -> bool {
        self.cases
            .iter()
            .filter(|c| c.active)
            .all(|c| (c.predicate)(bookmark))
    }

    /// All bookmarks of `library` that pass, in library order
    #[must_use]
    pub fn apply<'l>(&self, library: &'l BookmarkLibrary) -> Vec<&'l Bookmark> {
        library.iter().filter(|bm| self.include(bm)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::BookmarkUrl;

    fn library() -> BookmarkLibrary {
        let entries: [(u64, &str, &str, &str, &str); 3] = [
            (1, "one", "https://github.com", "Code hosting", "news,weather"),
            (2, "two", "https://facebook.com", "Social", "software"),
            (3, "three", "https://bbc.co.uk", "BBC News", "news,software"),
        ];
        let bookmarks = entries
            .iter()
            .map(|(id, title, url, desc, tags)| {
                let mut bm = Bookmark::new(*id, BookmarkUrl::parse(url).unwrap());
                bm.title = (*title).to_string();
                bm.description = (*desc).to_string();
                bm.tags.append_from_delimited_string(tags);
                bm
            })
            .collect();
        BookmarkLibrary::from_bookmarks(bookmarks, true)
    }

    fn ids(found: &[&Bookmark]) -> Vec<u64> {
        found.iter().map(|bm| bm.id()).collect()
    }

    #[test]
    fn test_no_active_cases_includes_everything() {
        let lib = library();
        let query = BookmarkQuery::default();
        assert!(query.is_empty());

        let filters = FilterSet::from_query(&query);
        assert_eq!(filters.active_count(), 0);
        assert_eq!(ids(&filters.apply(&lib)), vec![1, 2, 3]);
    }

    #[test]
    fn test_tags_only() {
        let lib = library();
        let query = BookmarkQuery {
            tags: Some(vec!["news".to_string()]),
            ..Default::default()
        };
        assert_eq!(ids(&FilterSet::from_query(&query).apply(&lib)), vec![1, 3]);
    }

    #[test]
    fn test_tags_require_all() {
        let lib = library();
        let query = BookmarkQuery {
            tags: Some(vec!["news".to_string(), "software".to_string()]),
            ..Default::default()
        };
        assert_eq!(ids(&FilterSet::from_query(&query).apply(&lib)), vec![3]);
    }

    #[test]
    fn test_empty_tag_list_matches_nothing() {
        let lib = library();
        let query = BookmarkQuery {
            tags: Some(Vec::new()),
            ..Default::default()
        };
        assert!(FilterSet::from_query(&query).apply(&lib).is_empty());
    }

    #[test]
    fn test_id() {
        let lib = library();
        let query = BookmarkQuery {
            id: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&FilterSet::from_query(&query).apply(&lib)), vec![2]);
    }

    #[test]
    fn test_cases_are_anded() {
        let lib = library();
        let query = BookmarkQuery {
            tags: Some(vec!["news".to_string()]),
            url: Some("BBC".to_string()),
            ..Default::default()
        };
        let filters = FilterSet::from_query(&query);
        assert_eq!(filters.active_count(), 2);
        assert_eq!(ids(&filters.apply(&lib)), vec![3]);
    }

    #[test]
    fn test_name_and_description() {
        let lib = library();
        let by_name = BookmarkQuery {
            name: Some("T".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&FilterSet::from_query(&by_name).apply(&lib)), vec![2, 3]);

        let by_desc = BookmarkQuery {
            description: Some("news".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&FilterSet::from_query(&by_desc).apply(&lib)), vec![3]);
    }

    #[test]
    fn test_empty_substring_query_matches_nothing() {
        let lib = library();
        let query = BookmarkQuery {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(FilterSet::from_query(&query).apply(&lib).is_empty());
    }

    #[test]
    fn test_inactive_case_is_ignored() {
        let lib = library();
        let filters = FilterSet::new()
            .with_case(FilterCase::new(false, |_| false))
            .with_case(FilterCase::new(true, |bm| bm.id() > 1));
        assert_eq!(ids(&filters.apply(&lib)), vec![2, 3]);
    }
}
