//! Library-specific error types
//!
//! This module defines all error types that can occur while manipulating or
//! persisting the bookmark library.
//!
//! # Error Types
//!
//! - **`InvalidUrl`**: A URL string could not be parsed
//! - **`NotFound`**: No bookmark carries the requested number
//! - **`DuplicateId`** / **`DuplicateUrl`**: The library failed verification
//! - **`MalformedInteractiveBlock`**: An edited bookmark block could not be read back
//! - **`Io`** / **`Json`** / **`AtomicWrite`**: Storage failures
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use std::path::PathBuf;
use thiserror::Error;

/// Library-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// A URL failed to parse
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The raw input
        url: String,
        /// Parser message
        reason: String,
    },

    /// No bookmark with the given number
    #[error("No bookmark with number {0} found")]
    NotFound(u64),

    /// The same bookmark number appears more than once
    #[error("Bookmark number {id} used {count} times")]
    DuplicateId {
        /// Offending number
        id: u64,
        /// Number of occurrences
        count: usize,
    },

    /// The same URL appears more than once
    #[error("Bookmark URL {url} used {count} times")]
    DuplicateUrl {
        /// Offending URL
        url: String,
        /// Number of occurrences
        count: usize,
    },

    /// An interactive edit block could not be applied
    #[error("Malformed bookmark block: {0}")]
    MalformedInteractiveBlock(String),

    /// Reading or writing the bookmark file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The bookmark file does not contain a valid JSON bookmark array
    #[error("Error while decoding bookmarks: {0}")]
    Json(#[from] serde_json::Error),

    /// Replacing the bookmark file with the freshly written copy failed
    #[error("Failed to replace {}: {source}", path.display())]
    AtomicWrite {
        /// Destination file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
