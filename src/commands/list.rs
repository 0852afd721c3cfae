//! List command - filter bookmarks, show them and optionally open or copy them

use super::Session;
use crate::cli::ListArgs;
use crate::db::{Bookmark, DbError};
use crate::filters::FilterSet;
use crate::{Result, actions, output};
use log::warn;

/// Execute the list command
///
/// # Errors
/// Returns an error if the library cannot be loaded or JSON output fails
pub fn execute(session: &Session, args: &ListArgs) -> Result<()> {
    let library = session.load()?;
    let query = args.query();
    let found = FilterSet::from_query(&query).apply(&library);

    if args.json {
        println!("{}", render_json(&found)?);
    } else if found.is_empty() {
        if !session.quiet() {
            println!("No matching bookmarks.");
        }
    } else {
        println!("{}", render_listing(&found));
    }

    if args.copy {
        let urls = actions::join_urls(found.iter().map(|bm| bm.url.as_str()));
        if let Err(e) = actions::copy_to_clipboard(&urls) {
            warn!("{e}");
        }
    }

    if args.open {
        for bm in &found {
            if let Err(e) = actions::open_url(bm.url.as_str()) {
                warn!("{e}");
            }
        }
    }

    Ok(())
}

/// Bookmarks in display form, numbered from 0 and separated by blank lines
#[must_use]
pub fn render_listing(bookmarks: &[&Bookmark]) -> String {
    bookmarks
        .iter()
        .enumerate()
        .map(|(i, bm)| output::format_bookmark(bm, i))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Bookmarks as an indented JSON array, in the storage format
///
/// # Errors
/// Returns an error if serialization fails
pub fn render_json(bookmarks: &[&Bookmark]) -> Result<String> {
    Ok(serde_json::to_string_pretty(bookmarks).map_err(DbError::from)?)
}
