//! Add command - create a bookmark from flags, the clipboard or the editor

use super::Session;
use crate::cli::AddArgs;
use crate::db::BookmarkUrl;
use crate::{MarkrError, Result, actions, output, web};
use log::warn;

/// Where the URL of a new bookmark comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    Argument(String),
    Clipboard,
}

impl UrlSource {
    /// Exactly one of a URL argument or `--copy` must be given
    ///
    /// # Errors
    /// Returns `MarkrError::InvalidInput` if both or neither are given
    pub fn from_args(url: Option<&str>, from_clipboard: bool) -> Result<Self> {
        match (url, from_clipboard) {
            (Some(url), false) => Ok(Self::Argument(url.to_string())),
            (None, true) => Ok(Self::Clipboard),
            _ => Err(MarkrError::InvalidInput("Ambiguous URL source".to_string())),
        }
    }

    /// The raw URL text
    ///
    /// # Errors
    /// Returns an error if the clipboard cannot be read
    pub fn read(self) -> Result<String> {
        match self {
            Self::Argument(url) => Ok(url),
            Self::Clipboard => Ok(actions::read_clipboard()?),
        }
    }
}

/// Execute the add command, returning the new bookmark's number
///
/// # Errors
/// Returns an error if the URL is missing or invalid, editing fails, or the
/// library cannot be saved (for example because the URL is already bookmarked)
pub fn execute(session: &Session, args: &AddArgs) -> Result<u64> {
    let raw = UrlSource::from_args(args.url.as_deref(), args.copy)?.read()?;
    let url = BookmarkUrl::parse(&raw)?;

    let title = if args.autoname {
        match web::fetch_title(&url) {
            Ok(title) => Some(title),
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    } else {
        args.name.clone()
    };

    let mut library = session.load()?;
    let id = library.new_entry();
    {
        let bookmark = library.get_by_id_mut(id)?;
        bookmark.url = url;
        if let Some(title) = title {
            bookmark.title = title;
        }
        if let Some(desc) = &args.desc {
            bookmark.description.clone_from(desc);
        }
        for tag in &args.tags {
            bookmark.tags.append(tag);
        }
    }

    if args.edit {
        session.edit_bookmark(&mut library, id)?;
    }

    session.save(&library)?;
    println!("{}", output::format_bookmark(library.get_by_id(id)?, 0));
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;
    use crate::testing::{ScriptedEditor, ScriptedPrompter, TestLibrary};

    fn add_args(url: &str) -> AddArgs {
        AddArgs {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_source() {
        assert_eq!(
            UrlSource::from_args(Some("https://a.example"), false).unwrap(),
            UrlSource::Argument("https://a.example".to_string())
        );
        assert_eq!(UrlSource::from_args(None, true).unwrap(), UrlSource::Clipboard);
        assert!(matches!(
            UrlSource::from_args(Some("https://a.example"), true),
            Err(MarkrError::InvalidInput(_))
        ));
        assert!(UrlSource::from_args(None, false).is_err());
    }

    #[test]
    fn test_add_with_flags() {
        let test = TestLibrary::with_sample_bookmarks();
        let session = test.session(ScriptedEditor::unchanged(), ScriptedPrompter::answering(false));

        let args = AddArgs {
            name: Some("Rust".to_string()),
            desc: Some("The language".to_string()),
            tags: vec!["lang".to_string(), " rust ".to_string(), "lang".to_string()],
            ..add_args("https://www.rust-lang.org")
        };
        let id = execute(&session, &args).unwrap();
        assert_eq!(id, 4);

        let lib = test.load();
        let bm = lib.get_by_id(4).unwrap();
        assert_eq!(bm.title, "Rust");
        assert_eq!(bm.url.as_str(), "https://www.rust-lang.org/");
        assert_eq!(bm.description, "The language");
        assert_eq!(bm.tags.as_slice(), ["lang", "rust"]);
    }

    #[test]
    fn test_add_without_name_is_untitled() {
        let test = TestLibrary::new();
        let session = test.session(ScriptedEditor::unchanged(), ScriptedPrompter::answering(false));

        assert_eq!(execute(&session, &add_args("https://a.example")).unwrap(), 1);
        assert_eq!(test.load().get_by_id(1).unwrap().title, "Untitled");
    }

    #[test]
    fn test_add_invalid_url_changes_nothing() {
        let test = TestLibrary::with_sample_bookmarks();
        let session = test.session(ScriptedEditor::unchanged(), ScriptedPrompter::answering(false));

        let err = execute(&session, &add_args("not a url")).unwrap_err();
        assert!(matches!(err, MarkrError::Db(DbError::InvalidUrl { .. })));
        assert_eq!(test.load().len(), 3);
    }

    #[test]
    fn test_add_duplicate_url_is_rejected() {
        let test = TestLibrary::with_sample_bookmarks();
        let session = test.session(ScriptedEditor::unchanged(), ScriptedPrompter::answering(false));

        let err = execute(&session, &add_args("https://bbc.co.uk/")).unwrap_err();
        assert!(matches!(err, MarkrError::Db(DbError::DuplicateUrl { .. })));
        assert_eq!(test.load().len(), 3);
    }

    #[test]
    fn test_add_with_edit() {
        let test = TestLibrary::new();
        let editor = ScriptedEditor::replying(
            "## Title\nEdited\n## URL\nhttps://b.example\n## Description\n## Tags\nx\n",
        );
        let seen = editor.seen();
        let session = test.session(editor, ScriptedPrompter::answering(false));

        let args = AddArgs {
            name: Some("Before".to_string()),
            edit: true,
            ..add_args("https://a.example")
        };
        let id = execute(&session, &args).unwrap();

        assert!(seen.borrow()[0].contains("## Title\nBefore\n"));
        let lib = test.load();
        let bm = lib.get_by_id(id).unwrap();
        assert_eq!(bm.title, "Edited");
        assert_eq!(bm.url.as_str(), "https://b.example/");
        assert_eq!(bm.tags.as_slice(), ["x"]);
    }
}
