//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for markr using the `clap` crate.
//!
//! # Commands
//!
//! - **list** (default): filter and show bookmarks, optionally open or copy them
//! - **add** / **add-newsboat**: create a bookmark
//! - **edit**, **rm**, **copy**, **open**: act on one bookmark by number
//! - **prune**: review the bookmark that has gone longest without an update
//! - **tags**: every tag with its usage count
//! - **git**: run git next to the bookmark file
//! - **config**: show the effective configuration
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use markr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["markr", "-t", "news"]);
//! assert!(cli.command.is_none());
//!
//! let cli = Cli::parse_from(["markr", "rm", "3", "--force"]);
//! assert!(matches!(cli.get_command(), Commands::Rm { number: 3, force: true }));
//! ```

use crate::filters::BookmarkQuery;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filters and actions of the list command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Get bookmark by number
    #[arg(short = 'n', long = "number", value_name = "N")]
    pub number: Option<u64>,

    /// Get bookmarks carrying all of these tags (comma separated, repeatable)
    #[arg(short = 't', long = "tags", value_name = "TAG", value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Search in name
    #[arg(short = 's', long = "name", value_name = "TEXT")]
    pub name: Option<String>,

    /// Search in URL
    #[arg(short = 'u', long = "url", value_name = "TEXT")]
    pub url: Option<String>,

    /// Search in description
    #[arg(short = 'd', long = "desc", value_name = "TEXT")]
    pub desc: Option<String>,

    /// Open matching bookmarks in the browser
    #[arg(short = 'o', long = "open")]
    pub open: bool,

    /// Copy matching URLs to the clipboard, one per line
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Output in JSON format
    #[arg(short = 'j', long = "json")]
    pub json: bool,
}

impl ListArgs {
    /// The filters given on the command line
    #[must_use]
    pub fn query(&self) -> BookmarkQuery {
        BookmarkQuery {
            id: self.number,
            tags: self.tags.clone(),
            name: self.name.clone(),
            url: self.url.clone(),
            description: self.desc.clone(),
        }
    }
}

/// Fields for a new bookmark
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AddArgs {
    /// URL of the page
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Take the URL from the clipboard
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Name
    #[arg(short = 'n', long = "name", value_name = "NAME", conflicts_with = "autoname")]
    pub name: Option<String>,

    /// Description
    #[arg(short = 'd', long = "desc", value_name = "TEXT")]
    pub desc: Option<String>,

    /// Tags (comma separated, repeatable)
    #[arg(short = 't', long = "tags", value_name = "TAG", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Get bookmark name from the title of the page
    #[arg(short = 'a', long = "autoname")]
    pub autoname: bool,

    /// Add/edit the new bookmark in a text editor
    #[arg(short = 'e', long = "edit")]
    pub edit: bool,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the location of the config file
    Path,
}

#[derive(Parser, Debug)]
#[command(name = "markr")]
#[command(about = "Query and manage a bookmark library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filters for the default list command
    #[command(flatten)]
    pub list: ListArgs,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Bookmark file to use (overrides config)
    #[arg(long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List bookmarks, optionally filtered
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Add a new bookmark
    Add(AddArgs),

    /// Add a new bookmark from Newsboat's bookmark command
    #[command(name = "add-newsboat")]
    AddNewsboat {
        /// URL of the article
        url: String,

        /// Article title
        title: String,

        /// Article description
        description: String,

        /// Title of the feed the article came from
        feed_title: Option<String>,

        /// Edit the new bookmark in a text editor
        #[arg(short = 'e', long = "edit")]
        edit: bool,
    },

    /// Edit a bookmark in a text editor
    Edit {
        /// Bookmark number
        number: u64,
    },

    /// Remove a bookmark
    Rm {
        /// Bookmark number
        number: u64,

        /// Remove without confirmation
        #[arg(long = "force")]
        force: bool,
    },

    /// Copy a bookmark's URL to the clipboard
    Copy {
        /// Bookmark number
        number: u64,
    },

    /// Open a bookmark in the browser
    Open {
        /// Bookmark number
        number: u64,
    },

    /// Review the least recently updated bookmark
    Prune,

    /// List all tags
    Tags,

    /// Run git in the directory containing the bookmark file
    Git {
        /// Arguments passed to git
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to List with the top-level filters
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::List(self.list.clone()))
    }
}
