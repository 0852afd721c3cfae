//! Edit command - change a bookmark in the text editor

use super::Session;
use crate::{Result, output};

/// Execute the edit command
///
/// # Errors
/// Returns an error if the bookmark does not exist, editing fails or the
/// result cannot be saved
pub fn execute(session: &Session, number: u64) -> Result<()> {
    let mut library = session.load()?;
    session.edit_bookmark(&mut library, number)?;
    session.save(&library)?;
    println!("{}", output::format_bookmark(library.get_by_id(number)?, 0));
    Ok(())
}
