//! The bookmark record and its interactive text form
//!
//! A [`Bookmark`] can be rendered to, and updated from, a plain text block
//! that is handed to an external editor:
//!
//! ```text
//! # Bookmark
//! # Headings must not be edited
//! # Lines starting with a # are ignored
//! ## Title
//! BBC
//! ## URL
//! https://bbc.co.uk/
//! ## Description
//! BBC News and Weather
//! ## Tags (comma and newline separated)
//! news
//! weather
//! ```

use super::error::DbError;
use super::tags::TagList;
use super::url::BookmarkUrl;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to freshly created bookmarks
pub const DEFAULT_TITLE: &str = "Untitled";

pub const TITLE_HEADER: &str = "## Title";
pub const URL_HEADER: &str = "## URL";
pub const DESCRIPTION_HEADER: &str = "## Description";
pub const TAGS_HEADER: &str = "## Tags";

/// Headers in the order they are matched
const HEADERS: [Section; 4] = [Section::Title, Section::Url, Section::Description, Section::Tags];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Url,
    Description,
    Tags,
}

impl Section {
    const fn header(self) -> &'static str {
        match self {
            Self::Title => TITLE_HEADER,
            Self::Url => URL_HEADER,
            Self::Description => DESCRIPTION_HEADER,
            Self::Tags => TAGS_HEADER,
        }
    }

    fn detect(line: &str) -> Option<Self> {
        HEADERS.into_iter().find(|s| line.starts_with(s.header()))
    }
}

/// A single bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "index")]
    id: u64,
    #[serde(rename = "uri")]
    pub url: BookmarkUrl,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: TagList,
    #[serde(rename = "whenAdded", default)]
    created_at: DateTime<Utc>,
    #[serde(rename = "lastUpdated", default)]
    updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Create a bookmark with the given number and URL.
    ///
    /// Both timestamps are set to now. Numbers are normally handed out by
    /// [`BookmarkLibrary::new_entry`](super::BookmarkLibrary::new_entry).
    #[must_use]
    pub fn new(id: u64, url: BookmarkUrl) -> Self {
        let now = Utc::now();
        Self {
            id,
            url,
            title: String::new(),
            description: String::new(),
            tags: TagList::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Override the creation time (imports, tests)
    #[must_use]
    pub const fn with_created_at(mut self, when: DateTime<Utc>) -> Self {
        self.created_at = when;
        self
    }

    /// Override the last update time (imports, tests)
    #[must_use]
    pub const fn with_updated_at(mut self, when: DateTime<Utc>) -> Self {
        self.updated_at = when;
        self
    }

    /// Record that the bookmark was reviewed or changed now
    pub fn mark_updated(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether a non-empty title is set
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    #[must_use]
    pub fn matches_name(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query)
    }

    #[must_use]
    pub fn matches_url(&self, query: &str) -> bool {
        contains_ignore_case(self.url.as_str(), query)
    }

    #[must_use]
    pub fn matches_description(&self, query: &str) -> bool {
        contains_ignore_case(&self.description, query)
    }

    /// Render the bookmark as an editable text block
    #[must_use]
    pub fn format_interactive_block(&self) -> String {
        format!(
            "# Bookmark\n\
             # Headings must not be edited\n\
             # Lines starting with a # are ignored\n\
             {TITLE_HEADER}\n{}\n\
             {URL_HEADER}\n{}\n\
             {DESCRIPTION_HEADER}\n{}\n\
             {TAGS_HEADER} (comma and newline separated)\n{}\n",
            self.title,
            self.url,
            self.description,
            self.tags.multiline_string(),
        )
    }

    /// Replace title, URL, description and tags from an edited text block.
    ///
    /// Lines before the first header and lines starting with `#` are ignored.
    /// The title is the last non-blank line of its section, the URL the first.
    /// Non-blank description lines are joined with a single newline, so blank
    /// lines between paragraphs collapse. The bookmark is left untouched when
    /// the block cannot be parsed.
    ///
    /// # Errors
    ///
    /// Returns `DbError::MalformedInteractiveBlock` if the URL section is
    /// empty or does not hold a valid URL.
    pub fn update_from_interactive_block(&mut self, text: &str) -> Result<(), DbError> {
        let mut section = None;
        let mut title = String::new();
        let mut url = None;
        let mut description: Vec<&str> = Vec::new();
        let mut tags = TagList::new();

        for line in text.lines().map(str::trim) {
            if let Some(found) = Section::detect(line) {
                section = Some(found);
            }
            if line.starts_with('#') {
                continue;
            }

            match section {
                None => {}
                Some(Section::Title) => {
                    if !line.is_empty() {
                        line.clone_into(&mut title);
                    }
                }
                Some(Section::Url) => {
                    if !line.is_empty() && url.is_none() {
                        let parsed = BookmarkUrl::parse(line)
                            .map_err(|e| DbError::MalformedInteractiveBlock(e.to_string()))?;
                        url = Some(parsed);
                    }
                }
                Some(Section::Description) => {
                    if !line.is_empty() {
                        description.push(line);
                    }
                }
                Some(Section::Tags) => tags.append_from_delimited_string(line),
            }
        }

        let url = url.ok_or_else(|| {
            DbError::MalformedInteractiveBlock("the URL section is empty".to_string())
        })?;

        self.title = title;
        self.url = url;
        self.description = description.join("\n");
        self.tags = tags;
        Ok(())
    }
}

/// Case-insensitive substring test; an empty query never matches
fn contains_ignore_case(haystack: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}
