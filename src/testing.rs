//! Testing utilities for markr
//!
//! Provides a bookmark file in a scratch directory and scripted stand-ins
//! for the editor and prompts, so commands can run without a terminal.
//!
//! Only available when compiled with `cfg(test)`.

use crate::commands::Session;
use crate::db::{Bookmark, BookmarkLibrary, BookmarkUrl, JsonStore, Storage};
use crate::ui::{self, PruneAction, TextEditor, UserPrompter};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

/// A bookmark file in a temporary directory that is removed on drop
pub struct TestLibrary {
    _dir: TempDir,
    store: JsonStore,
}

impl TestLibrary {
    /// An empty scratch directory; the bookmark file does not exist yet
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonStore::new(dir.path().join("bookmarks.json"), true);
        Self { _dir: dir, store }
    }

    /// A bookmark file holding the usual three bookmarks
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_sample_bookmarks() -> Self {
        let lib = Self::new();
        lib.store.save(&sample_library()).expect("Failed to save sample library");
        lib
    }

    #[must_use]
    pub const fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Load what is currently on disk
    ///
    /// # Panics
    /// Panics if the file cannot be loaded.
    #[must_use]
    pub fn load(&self) -> BookmarkLibrary {
        self.store.load().expect("Failed to load test library")
    }

    /// A quiet session on this file with the given editor and prompter
    #[must_use]
    pub fn session(&self, editor: ScriptedEditor, prompter: ScriptedPrompter) -> Session {
        Session::new(self.store.clone(), Box::new(editor), Box::new(prompter)).with_quiet(true)
    }
}

impl Default for TestLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Bookmarks 1-3: github (news, weather), facebook (software), bbc (news, software)
#[must_use]
pub fn sample_library() -> BookmarkLibrary {
    let entries = [
        (1, "one", "https://github.com", "Code hosting", "news,weather"),
        (2, "two", "https://facebook.com", "Social", "software"),
        (3, "three", "https://bbc.co.uk", "BBC News", "news,software"),
    ];
    let bookmarks = entries
        .into_iter()
        .map(|(id, title, url, desc, tags)| {
            let mut bm = Bookmark::new(id, BookmarkUrl::parse(url).expect("valid sample URL"));
            bm.title = title.to_string();
            bm.description = desc.to_string();
            bm.tags.append_from_delimited_string(tags);
            bm
        })
        .collect();
    BookmarkLibrary::from_bookmarks(bookmarks, true)
}

/// Editor that answers with a fixed text, or hands the text back unchanged
#[derive(Clone, Default)]
pub struct ScriptedEditor {
    reply: Option<String>,
    seen: Rc<RefCell<Vec<String>>>,
}

impl ScriptedEditor {
    /// Save the text as given
    #[must_use]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Replace the whole text with `reply`
    #[must_use]
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::default()
        }
    }

    /// Every text this editor was opened on, shared with clones
    #[must_use]
    pub fn seen(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.seen)
    }
}

impl TextEditor for ScriptedEditor {
    fn edit_text(&self, text: &str) -> ui::Result<String> {
        self.seen.borrow_mut().push(text.to_string());
        Ok(self.reply.clone().unwrap_or_else(|| text.to_string()))
    }
}

/// Prompter with canned answers
#[derive(Clone, Copy)]
pub struct ScriptedPrompter {
    pub confirm: bool,
    pub prune: PruneAction,
}

impl ScriptedPrompter {
    #[must_use]
    pub const fn answering(confirm: bool) -> Self {
        Self {
            confirm,
            prune: PruneAction::Keep,
        }
    }

    #[must_use]
    pub const fn pruning(prune: PruneAction) -> Self {
        Self {
            confirm: false,
            prune,
        }
    }
}

impl UserPrompter for ScriptedPrompter {
    fn confirm(&self, _prompt: &str) -> ui::Result<bool> {
        Ok(self.confirm)
    }

    fn choose_prune_action(&self) -> ui::Result<PruneAction> {
        Ok(self.prune)
    }
}
