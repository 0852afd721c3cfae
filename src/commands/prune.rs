//! Prune command - review the bookmark that has gone longest without an update

use super::Session;
use crate::ui::PruneAction;
use crate::{Result, output};

/// What `prune` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneOutcome {
    /// The library is empty
    Nothing,
    /// The bookmark with this number was reviewed
    Reviewed(u64, PruneAction),
}

/// Execute the prune command
///
/// The library keeps its order; only the chosen bookmark changes.
///
/// # Errors
/// Returns an error if the prompt or editor fails or the library cannot be saved
pub fn execute(session: &Session) -> Result<PruneOutcome> {
    let mut library = session.load()?;
    let Some(id) = library.least_recently_updated() else {
        if !session.quiet() {
            println!("No bookmarks to review.");
        }
        return Ok(PruneOutcome::Nothing);
    };

    println!("{}", output::format_bookmark(library.get_by_id(id)?, 0));

    let action = session.prompter().choose_prune_action()?;
    match action {
        PruneAction::Keep => library.get_by_id_mut(id)?.mark_updated(),
        PruneAction::Edit => {
            session.edit_bookmark(&mut library, id)?;
            println!("{}", output::format_bookmark(library.get_by_id(id)?, 0));
        }
        PruneAction::Delete => {
            library.delete_by_id(id)?;
        }
    }

    session.save(&library)?;
    Ok(PruneOutcome::Reviewed(id, action))
}
