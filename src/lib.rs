//! Markr - a personal bookmark manager for the command line
//!
//! Bookmarks live in a single JSON file. Each one has a number, a URL, a
//! title, a free text description and a set of tags. Bookmarks are edited as
//! a small plain-text block in the user's editor, and the library can be
//! committed to git automatically after every change.

use thiserror::Error;

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod filters;
pub mod output;
pub mod ui;
pub mod vcs;
pub mod web;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MarkrError {
    /// Bookmark storage or validation error
    #[error(transparent)]
    Db(#[from] db::DbError),
    /// Prompt or editor error
    #[error(transparent)]
    Ui(#[from] ui::UiError),
    /// Fetching a page failed
    #[error("Web error: {0}")]
    Web(#[from] web::WebError),
    /// git failed
    #[error("Git error: {0}")]
    Vcs(#[from] vcs::VcsError),
    /// Clipboard or browser failed
    #[error(transparent)]
    Action(#[from] actions::ActionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, MarkrError>;
