//! Unit tests for the command session

#[cfg(test)]
mod tests {
    use crate::MarkrError;
    use crate::commands::editor_text;
    use crate::db::{Bookmark, BookmarkUrl, DbError};
    use crate::testing::{ScriptedEditor, ScriptedPrompter, TestLibrary};
    use pretty_assertions::assert_eq;

    const EDITED: &str = "## Title
GitHub
## URL
https://github.com/rust-lang
## Description
Where Rust lives
## Tags (comma and newline separated)
code, rust
";

    #[test]
    fn test_load_creates_missing_file() {
        let test = TestLibrary::new();
        let session = test.session(ScriptedEditor::unchanged(), ScriptedPrompter::answering(false));

        assert!(session.load().unwrap().is_empty());
        assert!(test.store().path().exists());
    }

    #[test]
    fn test_save_without_repository_still_saves() {
        let test = TestLibrary::new();
        let session = test
            .session(ScriptedEditor::unchanged(), ScriptedPrompter::answering(false))
            .with_auto_commit(true);

        let mut lib = session.load().unwrap();
        lib.new_entry();
        session.save(&lib).unwrap();
        assert_eq!(test.load().len(), 1);
    }

    #[test]
    fn test_editor_text_lists_existing_tags() {
        let test = TestLibrary::with_sample_bookmarks();
        let lib = test.load();
        let text = editor_text(lib.get_by_id(2).unwrap(), &lib.all_tags());

        assert!(text.starts_with("# Bookmark\n"));
        assert!(text.contains("## URL\nhttps://facebook.com/\n"));
        assert!(text.ends_with("# Existing tags:\n# news\n# software\n# weather\n"));
    }

    #[test]
    fn test_editor_text_parses_back_unchanged() {
        let url = BookmarkUrl::parse("https://bbc.co.uk").unwrap();
        let mut bm = Bookmark::new(1, url);
        bm.title = "BBC".to_string();
        bm.tags.append("news");
        let before = bm.clone();

        let text = editor_text(&bm, &Default::default());
        bm.update_from_interactive_block(&text).unwrap();
        assert_eq!(bm, before);
    }

    #[test]
    fn test_edit_bookmark_applies_changes() {
        let test = TestLibrary::with_sample_bookmarks();
        let editor = ScriptedEditor::replying(EDITED);
        let seen = editor.seen();
        let session = test.session(editor, ScriptedPrompter::answering(false));

        let mut lib = session.load().unwrap();
        let before = lib.get_by_id(1).unwrap().updated_at();
        session.edit_bookmark(&mut lib, 1).unwrap();

        let bm = lib.get_by_id(1).unwrap();
        assert_eq!(bm.title, "GitHub");
        assert_eq!(bm.url.as_str(), "https://github.com/rust-lang");
        assert_eq!(bm.description, "Where Rust lives");
        assert_eq!(bm.tags.as_slice(), ["code", "rust"]);
        assert!(bm.updated_at() >= before);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("## Title\none\n"));
    }

    #[test]
    fn test_malformed_edit_leaves_bookmark_alone() {
        let test = TestLibrary::with_sample_bookmarks();
        let session = test.session(
            ScriptedEditor::replying("## Title\nBroken\n## URL\n\n"),
            ScriptedPrompter::answering(false),
        );

        let mut lib = session.load().unwrap();
        let before = lib.get_by_id(3).unwrap().clone();
        let err = session.edit_bookmark(&mut lib, 3).unwrap_err();

        assert!(matches!(err, MarkrError::Db(DbError::MalformedInteractiveBlock(_))));
        assert_eq!(lib.get_by_id(3).unwrap(), &before);
    }

    #[test]
    fn test_edit_missing_bookmark() {
        let test = TestLibrary::with_sample_bookmarks();
        let editor = ScriptedEditor::unchanged();
        let seen = editor.seen();
        let session = test.session(editor, ScriptedPrompter::answering(false));

        let mut lib = session.load().unwrap();
        let err = session.edit_bookmark(&mut lib, 42).unwrap_err();
        assert!(matches!(err, MarkrError::Db(DbError::NotFound(42))));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_edit_refuses_unverified_library() {
        let test = TestLibrary::with_sample_bookmarks();
        let editor = ScriptedEditor::unchanged();
        let seen = editor.seen();
        let session = test.session(editor, ScriptedPrompter::answering(false));

        let mut lib = session.load().unwrap();
        let id = lib.new_entry();
        lib.get_by_id_mut(id).unwrap().url = BookmarkUrl::parse("https://bbc.co.uk").unwrap();

        let err = session.edit_bookmark(&mut lib, id).unwrap_err();
        assert!(matches!(err, MarkrError::Db(DbError::DuplicateUrl { count: 2, .. })));
        assert!(seen.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_auto_commit_follows_symlinked_file() {
        use crate::commands::Session;
        use crate::db::JsonStore;
        use crate::vcs::AUTO_COMMIT_MESSAGE;
        use std::os::unix::fs::symlink;
        use std::path::Path;
        use std::process::{Command, Output};
        use tempfile::TempDir;

        fn git(dir: &Path, args: &[&str]) -> Output {
            Command::new("git").arg("-C").arg(dir).args(args).output().unwrap()
        }

        if Command::new("git").arg("--version").output().is_err() {
            return;
        }
        let repo = TempDir::new().unwrap();
        git(repo.path(), &["init", "--quiet"]);
        git(repo.path(), &["config", "user.name", "Markr Test"]);
        git(repo.path(), &["config", "user.email", "markr@example.com"]);
        git(repo.path(), &["config", "commit.gpgsign", "false"]);

        let home = TempDir::new().unwrap();
        let link = home.path().join("bookmarks.json");
        symlink(repo.path().join("bookmarks.json"), &link).unwrap();

        let session = Session::new(
            JsonStore::new(&link, true),
            Box::new(ScriptedEditor::unchanged()),
            Box::new(ScriptedPrompter::answering(false)),
        )
        .with_auto_commit(true);
        let mut lib = session.load().unwrap();
        lib.new_entry();
        session.save(&lib).unwrap();

        let out = git(repo.path(), &["log", "-1", "--format=%s", "--", "bookmarks.json"]);
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), AUTO_COMMIT_MESSAGE);
    }
}
