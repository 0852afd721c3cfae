//! Editing text in an external editor
//!
//! The text is written to a temporary file, the editor is run on it with
//! inherited stdio, and the file is read back once the editor exits.

use super::error::{Result, UiError};
use log::debug;
use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;

/// Editor used when nothing else is configured
pub const FALLBACK_EDITOR: &str = "vi";

/// Something that lets the user edit a piece of text
pub trait TextEditor {
    /// Hand `text` to the user and return what they saved
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the edit could not be carried out.
    fn edit_text(&self, text: &str) -> Result<String>;
}

/// Pick the editor command: `$VISUAL`, `$EDITOR`, the configured editor, then `vi`
///
/// Empty values are skipped.
#[must_use]
pub fn resolve_editor(visual: Option<String>, editor: Option<String>, configured: Option<&str>) -> String {
    [visual, editor, configured.map(str::to_string)]
        .into_iter()
        .flatten()
        .map(|e| e.trim().to_string())
        .find(|e| !e.is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// The user's editor, run as a child process
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    /// Use exactly `command`, which may carry arguments (`code --wait`)
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Editor from the environment, falling back to `configured` and then `vi`
    #[must_use]
    pub fn from_env(configured: Option<&str>) -> Self {
        Self::new(resolve_editor(
            env::var("VISUAL").ok(),
            env::var("EDITOR").ok(),
            configured,
        ))
    }
}

impl TextEditor for ExternalEditor {
    fn edit_text(&self, text: &str) -> Result<String> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| UiError::Editor("No editor command given".to_string()))?;

        let mut file = tempfile::Builder::new()
            .prefix("markr-")
            .suffix(".md")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        debug!("Running editor '{}' on {}", self.command, file.path().display());
        let status = Command::new(program)
            .args(parts)
            .arg(file.path())
            .status()
            .map_err(|e| UiError::Editor(format!("Failed to launch editor '{program}': {e}")))?;

        if !status.success() {
            return Err(UiError::Editor(format!(
                "Editor '{program}' exited with status: {:?}",
                status.code()
            )));
        }

        Ok(fs::read_to_string(file.path())?)
    }
}
