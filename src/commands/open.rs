//! Open command - show a bookmark in the browser

use super::Session;
use crate::{Result, actions, output};

/// Execute the open command
///
/// # Errors
/// Returns an error if the bookmark does not exist or no browser could be launched
pub fn execute(session: &Session, number: u64) -> Result<()> {
    let library = session.load()?;
    let bookmark = library.get_by_id(number)?;

    println!("{}", output::format_bookmark(bookmark, 0));
    actions::open_url(bookmark.url.as_str())?;
    Ok(())
}
