//! Terminal interaction
//!
//! - [`prompts`]: yes/no confirmation and the prune menu
//! - [`editor`]: round-tripping text through the user's editor
//!
//! Both are reached through small traits so commands can be exercised
//! without a terminal.

pub mod editor;
pub mod error;
pub mod prompts;

pub use editor::{ExternalEditor, TextEditor};
pub use error::{Result, UiError};
pub use prompts::{DialoguerPrompter, PruneAction, UserPrompter, parse_confirmation, read_confirmation};
