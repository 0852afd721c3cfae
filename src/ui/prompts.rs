//! User prompts: yes/no confirmation and the prune action menu

use super::error::{Result, UiError};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

/// What to do with a bookmark offered by `prune`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneAction {
    /// Still relevant, mark it as reviewed
    Keep,
    /// Open it in the editor
    Edit,
    /// Remove it from the library
    Delete,
}

impl PruneAction {
    /// All actions in menu order
    pub const ALL: [Self; 3] = [Self::Keep, Self::Edit, Self::Delete];
}

impl fmt::Display for PruneAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Edit => write!(f, "edit"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Interpret a free-form yes/no answer
///
/// Any `y`/`Y` means yes and any `n`/`N` means no. An answer with neither is
/// a no, an answer with both cannot be interpreted.
///
/// # Errors
///
/// Returns `UiError::AmbiguousResponse` if the answer contains both.
pub fn parse_confirmation(answer: &str) -> Result<bool> {
    let yes = answer.contains(['y', 'Y']);
    let no = answer.contains(['n', 'N']);

    if yes && no {
        return Err(UiError::AmbiguousResponse(answer.trim().to_string()));
    }
    Ok(yes)
}

/// Read one line from `reader` and interpret it as a yes/no answer
///
/// End of input counts as no.
///
/// # Errors
///
/// Returns `UiError` if reading fails or the answer is ambiguous.
pub fn read_confirmation(reader: &mut impl BufRead) -> Result<bool> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    parse_confirmation(&answer)
}

/// Trait for asking the user things
pub trait UserPrompter {
    /// Ask a yes/no question, defaulting to no
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the answer cannot be read or is ambiguous.
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Ask what to do with a bookmark under review
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the menu cannot be shown.
    fn choose_prune_action(&self) -> Result<PruneAction>;
}

/// CLI prompts using dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if !io::stdin().is_terminal() {
            eprint!("{prompt} (y/N) ");
            io::stderr().flush()?;
            return read_confirmation(&mut io::stdin().lock());
        }

        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("{prompt} (y/N)"))
            .allow_empty(true)
            .interact_text()?;
        parse_confirmation(&answer)
    }

    fn choose_prune_action(&self) -> Result<PruneAction> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Action")
            .items(&PruneAction::ALL)
            .default(0)
            .interact()?;
        Ok(PruneAction::ALL[index])
    }
}
