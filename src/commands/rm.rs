//! Rm command - remove a bookmark, asking first unless forced

use super::Session;
use crate::{Result, output};

/// Execute the rm command, returning whether the bookmark was removed
///
/// # Errors
/// Returns an error if the bookmark does not exist, the answer is ambiguous
/// or the library cannot be saved
pub fn execute(session: &Session, number: u64, force: bool) -> Result<bool> {
    let mut library = session.load()?;
    let bookmark = library.get_by_id(number)?;

    if !force {
        println!("{}", output::format_bookmark(bookmark, 0));
        if !session.prompter().confirm("Really remove bookmark?")? {
            println!("Bookmark not removed.");
            return Ok(false);
        }
    }

    library.delete_by_id(number)?;
    session.save(&library)?;
    if !session.quiet() {
        println!("Removed bookmark {number}.");
    }
    Ok(true)
}
