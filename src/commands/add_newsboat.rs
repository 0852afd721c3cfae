//! Add-newsboat command - the target of Newsboat's `bookmark-cmd`
//!
//! Newsboat calls the command with the article URL, title, description and
//! the title of the feed.

use super::Session;
use crate::db::BookmarkUrl;
use crate::{Result, output};
use log::debug;

/// Execute the add-newsboat command, returning the new bookmark's number
///
/// The feed title is accepted but not stored.
///
/// # Errors
/// Returns an error if the URL is invalid, editing fails or the library
/// cannot be saved
pub fn execute(
    session: &Session,
    url: &str,
    title: &str,
    description: &str,
    feed_title: Option<&str>,
    edit: bool,
) -> Result<u64> {
    let url = BookmarkUrl::parse(url)?;
    if let Some(feed) = feed_title {
        debug!("Bookmarking article from feed '{feed}'");
    }

    let mut library = session.load()?;
    let id = library.new_entry();
    {
        let bookmark = library.get_by_id_mut(id)?;
        bookmark.url = url;
        title.clone_into(&mut bookmark.title);
        description.clone_into(&mut bookmark.description);
    }

    if edit {
        session.edit_bookmark(&mut library, id)?;
    }

    session.save(&library)?;
    println!("{}", output::format_bookmark(library.get_by_id(id)?, 0));
    Ok(id)
}
