//! Desktop integration: clipboard and browser

use log::debug;
use thiserror::Error;

/// Errors from the clipboard or the browser
#[derive(Debug, Error)]
pub enum ActionError {
    /// The clipboard could not be reached, read or written
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// The URL could not be handed to a browser
    #[error("Failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Open `url` in the default browser
///
/// # Errors
///
/// Returns `ActionError::Open` if no handler could be launched.
pub fn open_url(url: &str) -> Result<(), ActionError> {
    debug!("Opening {url}");
    open::that(url).map_err(|source| ActionError::Open {
        url: url.to_string(),
        source,
    })
}

/// Put `text` on the system clipboard
///
/// # Errors
///
/// Returns `ActionError::Clipboard` if the clipboard is unavailable.
pub fn copy_to_clipboard(text: &str) -> Result<(), ActionError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    debug!("Copied {} byte(s) to clipboard", text.len());
    Ok(())
}

/// Text currently on the system clipboard
///
/// # Errors
///
/// Returns `ActionError::Clipboard` if the clipboard is unavailable or holds
/// no text.
pub fn read_clipboard() -> Result<String, ActionError> {
    let mut clipboard = arboard::Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

/// URLs joined one per line, the form used for copying several bookmarks
#[must_use]
pub fn join_urls<'a>(urls: impl IntoIterator<Item = &'a str>) -> String {
    urls.into_iter().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_urls() {
        assert_eq!(
            join_urls(["https://bbc.co.uk/", "https://github.com/"]),
            "https://bbc.co.uk/\nhttps://github.com/"
        );
        assert_eq!(join_urls(std::iter::empty()), "");
    }

    #[test]
    fn test_open_error_message() {
        let err = ActionError::Open {
            url: "https://example.com/".to_string(),
            source: std::io::Error::other("no browser"),
        };
        assert_eq!(err.to_string(), "Failed to open https://example.com/: no browser");
    }
}
