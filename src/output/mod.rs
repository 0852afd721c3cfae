//! Output formatting for CLI display
//!
//! Bookmarks are shown as a short block:
//!
//! ```text
//! 0. BBC News [3]
//!   > https://bbc.co.uk/
//!   # news, weather
//!   ? UK news
//!   + Sat Jul  7 10:00:00 UTC 2018
//! ```

use crate::db::Bookmark;
use colored::Colorize;

/// Timestamp format for the "added" line, as printed by `date`
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Format a bookmark for display; `index` is its position in the listing
#[must_use]
pub fn format_bookmark(bookmark: &Bookmark, index: usize) -> String {
    let name = if bookmark.has_title() {
        bookmark.title.green()
    } else {
        "[untitled]".red()
    };

    let mut out = format!(
        "{index}. {} [{}]\n  {} {}",
        name.bold(),
        bookmark.id().to_string().cyan().bold(),
        ">".red(),
        bookmark.url.as_str().yellow()
    );

    if !bookmark.tags.is_empty() {
        out.push_str(&format!("\n  {} {}", "#".red(), bookmark.tags.to_string().blue()));
    }

    if !bookmark.description.is_empty() {
        out.push_str(&format!(
            "\n  {} {}",
            "?".red(),
            bookmark.description.replace('\n', "\n    ")
        ));
    }

    out.push_str(&format!(
        "\n  {} {}",
        "+".red(),
        bookmark.created_at().format(DATE_FORMAT).to_string().cyan()
    ));

    out
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("{} {} ({count})", "-".cyan(), tag.blue().bold())
    }
}

/// Format a fatal error for stderr
#[must_use]
pub fn error(message: &str) -> String {
    format!("Error: {message}").red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::BookmarkUrl;
    use chrono::{TimeZone, Utc};

    fn plain() {
        colored::control::set_override(false);
    }

    fn sample() -> Bookmark {
        let added = Utc.with_ymd_and_hms(2018, 7, 7, 10, 0, 0).unwrap();
        let mut bm = Bookmark::new(3, BookmarkUrl::parse("https://bbc.co.uk").unwrap())
            .with_created_at(added);
        bm.title = "BBC News".to_string();
        bm
    }

    #[test]
    fn test_format_minimal_bookmark() {
        plain();
        let mut bm = sample();
        bm.title.clear();

        assert_eq!(
            format_bookmark(&bm, 0),
            "0. [untitled] [3]\n  > https://bbc.co.uk/\n  + Sat Jul  7 10:00:00 UTC 2018"
        );
    }

    #[test]
    fn test_format_full_bookmark() {
        plain();
        let mut bm = sample();
        bm.tags.append_from_delimited_string("weather, news");
        bm.description = "UK news\nand weather".to_string();

        assert_eq!(
            format_bookmark(&bm, 2),
            "2. BBC News [3]\n  > https://bbc.co.uk/\n  # news, weather\n  ? UK news\n    and weather\n  + Sat Jul  7 10:00:00 UTC 2018"
        );
    }

    #[test]
    fn test_tag_with_count() {
        plain();
        assert_eq!(tag_with_count("news", 2, false), "- news (2)");
        assert_eq!(tag_with_count("news", 2, true), "news");
    }

    #[test]
    fn test_error_message() {
        plain();
        assert_eq!(error("boom"), "Error: boom");
    }
}
