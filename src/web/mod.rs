//! Page title lookup for `add --autoname`

use crate::db::BookmarkUrl;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

const FETCH_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur while fetching a page title
#[derive(Debug, Error)]
pub enum WebError {
    /// Building the client, sending or reading the body failed
    #[error("Failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Failed to fetch {url}: status {status}")]
    Status { url: String, status: u16 },

    /// The page has no usable `<title>` element
    #[error("No title element found in {0}")]
    NoTitle(String),
}

/// Text of the first `<title>` element in `html`, trimmed
///
/// Returns `None` when there is no title or it is blank.
#[must_use]
pub fn find_title_element(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let mut cursor = 0;

    let start_content = loop {
        let start_tag = lower[cursor..].find("<title")? + cursor;
        let after_name = start_tag + "<title".len();
        match lower[after_name..].chars().next() {
            Some(c) if c == '>' || c.is_ascii_whitespace() => {
                break lower[after_name..].find('>')? + after_name + 1;
            }
            _ => cursor = after_name,
        }
    };
    let end_content = lower[start_content..].find("</title")? + start_content;

    let title = decode_basic_html_entities(&html[start_content..end_content]);
    let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}

fn decode_basic_html_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Download `url` and return its page title
///
/// # Errors
///
/// Returns `WebError` if the page cannot be fetched or has no title.
pub fn fetch_title(url: &BookmarkUrl) -> Result<String, WebError> {
    let request_error = |source: reqwest::Error| WebError::Request {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(concat!("markr/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(request_error)?;

    debug!("Fetching title of {url}");
    let response = client.get(url.as_str()).send().map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(WebError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(request_error)?;
    find_title_element(&body).ok_or_else(|| WebError::NoTitle(url.to_string()))
}
