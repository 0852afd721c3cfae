//! Copy command - put a bookmark's URL on the clipboard

use super::Session;
use crate::{Result, actions, output};

/// Execute the copy command
///
/// # Errors
/// Returns an error if the bookmark does not exist or the clipboard is unavailable
pub fn execute(session: &Session, number: u64) -> Result<()> {
    let library = session.load()?;
    let bookmark = library.get_by_id(number)?;

    println!("{}", output::format_bookmark(bookmark, 0));
    actions::copy_to_clipboard(bookmark.url.as_str())?;
    Ok(())
}
