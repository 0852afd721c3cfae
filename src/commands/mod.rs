//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs against a [`Session`]: the bookmark store plus the editor and
//! prompts used to talk to the user.

pub mod add;
pub mod add_newsboat;
pub mod config;
pub mod copy;
pub mod edit;
pub mod git;
pub mod list;
pub mod open;
pub mod prune;
pub mod rm;
pub mod tags;

use crate::config::MarkrConfig;
use crate::db::{Bookmark, BookmarkLibrary, JsonStore, Storage, TagAggregate};
use crate::ui::{DialoguerPrompter, ExternalEditor, TextEditor, UserPrompter};
use crate::{Result, vcs};
use log::{debug, warn};

/// Everything a command needs to read, change and persist the library
pub struct Session {
    store: JsonStore,
    editor: Box<dyn TextEditor>,
    prompter: Box<dyn UserPrompter>,
    auto_commit: bool,
    quiet: bool,
}

impl Session {
    /// A session with auto-commit off and informational output on
    pub fn new(store: JsonStore, editor: Box<dyn TextEditor>, prompter: Box<dyn UserPrompter>) -> Self {
        Self {
            store,
            editor,
            prompter,
            auto_commit: false,
            quiet: false,
        }
    }

    /// The interactive session described by `config`
    #[must_use]
    pub fn from_config(config: &MarkrConfig) -> Self {
        Self::new(
            JsonStore::new(&config.bookmark_file, config.unique_urls),
            Box::new(ExternalEditor::from_env(config.editor.as_deref())),
            Box::new(DialoguerPrompter::new()),
        )
        .with_auto_commit(config.auto_commit)
        .with_quiet(config.quiet)
    }

    #[must_use]
    pub fn with_auto_commit(mut self, auto_commit: bool) -> Self {
        self.auto_commit = auto_commit;
        self
    }

    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &JsonStore {
        &self.store
    }

    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    #[must_use]
    pub fn prompter(&self) -> &dyn UserPrompter {
        self.prompter.as_ref()
    }

    /// Load the library, creating an empty bookmark file on first use
    ///
    /// # Errors
    ///
    /// Returns `MarkrError::Db` if the file cannot be read or fails verification.
    pub fn load(&self) -> Result<BookmarkLibrary> {
        Ok(self.store.load()?)
    }

    /// Save the library and, when enabled, commit the bookmark file
    ///
    /// A failed commit is logged; the save itself has already succeeded.
    ///
    /// # Errors
    ///
    /// Returns `MarkrError::Db` if the library fails verification or cannot be written.
    pub fn save(&self, library: &BookmarkLibrary) -> Result<()> {
        self.store.save(library)?;

        if !self.auto_commit {
            return Ok(());
        }
        let file = self.store.resolved_path();
        if !vcs::is_in_repository(&self.store.parent_dir()) {
            debug!("{} is not in a git work tree, not committing", file.display());
            return Ok(());
        }
        if let Err(e) = vcs::commit_file(&file) {
            warn!("Could not commit {}: {e}", file.display());
        }
        Ok(())
    }

    /// Round-trip bookmark `id` through the editor
    ///
    /// The library is verified first so the user never edits on top of a
    /// broken file. The bookmark is only changed when the edited text parses.
    ///
    /// # Errors
    ///
    /// Returns `MarkrError` if verification fails, the bookmark does not exist,
    /// the editor fails or the edited text is malformed.
    pub fn edit_bookmark(&self, library: &mut BookmarkLibrary, id: u64) -> Result<()> {
        library.verify()?;
        let text = editor_text(library.get_by_id(id)?, &library.all_tags());

        let edited = self.editor.edit_text(&text)?;

        let bookmark = library.get_by_id_mut(id)?;
        bookmark.update_from_interactive_block(&edited)?;
        bookmark.mark_updated();
        Ok(())
    }
}

/// The text handed to the editor: the bookmark block followed by every tag
/// already in use, commented out
#[must_use]
pub fn editor_text(bookmark: &Bookmark, all_tags: &TagAggregate) -> String {
    let mut text = bookmark.format_interactive_block();
    text.push_str("# Existing tags:\n");
    for tag in &all_tags.tags {
        text.push_str("# ");
        text.push_str(tag);
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
