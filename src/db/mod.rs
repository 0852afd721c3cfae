//! Bookmark data model and storage
//!
//! Provides the in-memory bookmark library together with the types it is
//! built from, and a JSON file backend for persisting it.
//!
//! - [`TagList`]: sorted, deduplicated tag set
//! - [`BookmarkUrl`]: validated URL
//! - [`Bookmark`]: one record, plus its interactive text form
//! - [`BookmarkLibrary`]: the ordered collection and its invariants
//! - [`JsonStore`]: load/save of the library as a JSON array
//!
//! # Examples
//!
//! ```no_run
//! use markr::db::{BookmarkUrl, JsonStore, Storage};
//!
//! let store = JsonStore::new("bookmarks.json", true);
//! let mut library = store.load().unwrap();
//!
//! let id = library.new_entry();
//! let bookmark = library.get_by_id_mut(id).unwrap();
//! bookmark.url = BookmarkUrl::parse("https://www.rust-lang.org").unwrap();
//! bookmark.tags.append_from_delimited_string("rust, lang");
//!
//! store.save(&library).unwrap();
//! ```

pub mod bookmark;
pub mod error;
pub mod library;
pub mod store;
pub mod tags;
pub mod url;

pub use bookmark::{Bookmark, DEFAULT_TITLE};
pub use error::DbError;
pub use library::BookmarkLibrary;
pub use store::{JsonStore, Storage};
pub use tags::{TagAggregate, TagList};
pub use url::BookmarkUrl;
