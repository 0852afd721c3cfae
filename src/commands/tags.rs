//! Tags command - every tag in the library with its usage count

use super::Session;
use crate::{Result, output};

/// Execute the tags command
///
/// # Errors
/// Returns an error if the library cannot be loaded
pub fn execute(session: &Session) -> Result<()> {
    let tags = session.load()?.all_tags();

    if tags.tags.is_empty() {
        if !session.quiet() {
            println!("No tags found.");
        }
        return Ok(());
    }

    for (tag, count) in tags.iter() {
        println!("{}", output::tag_with_count(tag, count, session.quiet()));
    }
    Ok(())
}
