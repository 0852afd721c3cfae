//! Validated bookmark URLs
//!
//! [`BookmarkUrl`] wraps [`url::Url`] so that every URL stored in the library
//! has been parsed at least once. Its string form is the canonical
//! serialization produced by the `url` crate and is what the library compares
//! when checking URL uniqueness.

use super::error::DbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ::url::Url;

/// A parsed, canonicalized URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookmarkUrl(Url);

impl BookmarkUrl {
    /// Parse a raw URL string.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidUrl` if the string is not an absolute URL.
    pub fn parse(raw: &str) -> Result<Self, DbError> {
        let raw = raw.trim();
        Url::parse(raw).map(Self).map_err(|e| DbError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }

    /// Canonical string form
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for BookmarkUrl {
    fn default() -> Self {
        // "about:blank" always parses
        Self(Url::parse("about:blank").unwrap_or_else(|_| unreachable!()))
    }
}

impl FromStr for BookmarkUrl {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BookmarkUrl {
    type Error = DbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BookmarkUrl> for String {
    fn from(url: BookmarkUrl) -> Self {
        url.0.into()
    }
}

impl AsRef<str> for BookmarkUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BookmarkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
