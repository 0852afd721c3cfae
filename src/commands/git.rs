//! Git command - run git next to the bookmark file

use super::Session;
use crate::{Result, vcs};

/// Execute git with `args`, returning its exit code
///
/// Prints a notice and returns 0 when the bookmark file is not in a git work tree.
///
/// # Errors
/// Returns an error if git cannot be started
pub fn execute(session: &Session, args: &[String]) -> Result<i32> {
    let dir = session.store().parent_dir();
    if !vcs::is_in_repository(&dir) {
        println!("Bookmark file is not stored in a git repository.");
        return Ok(0);
    }
    Ok(vcs::run_git(&dir, args)?)
}
