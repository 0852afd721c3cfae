//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// A yes/no answer contained both a yes and a no
    #[error("Ambiguous response '{0}', answer y or n")]
    AmbiguousResponse(String),

    /// The editor could not be started or exited unsuccessfully
    #[error("Editor error: {0}")]
    Editor(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive menu failed
    #[error("Dialog error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
