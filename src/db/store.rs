//! JSON file storage for the bookmark library
//!
//! The library is persisted as an indented JSON array of bookmark objects.
//! Writes go to a temporary file next to the target which is then renamed
//! over it, so readers never observe a half-written file. A symlinked
//! bookmark file is written through to the file it points at.

use super::bookmark::Bookmark;
use super::error::DbError;
use super::library::BookmarkLibrary;
use log::debug;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Something that can load and save a whole library
pub trait Storage {
    /// Read and verify the library
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the data cannot be read, decoded or verified.
    fn load(&self) -> Result<BookmarkLibrary, DbError>;

    /// Verify and write the library
    ///
    /// # Errors
    ///
    /// Returns `DbError` if verification or writing fails.
    fn save(&self, library: &BookmarkLibrary) -> Result<(), DbError>;
}

/// Bookmark library stored in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    unique_urls: bool,
}

impl JsonStore {
    /// Create a store for `path`. Nothing is touched on disk yet.
    pub fn new<P: AsRef<Path>>(path: P, unique_urls: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            unique_urls,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file that is actually read and written, with symlinks followed
    ///
    /// A dangling link resolves to the path it names, so the first save
    /// creates the link's target.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if let Ok(real) = fs::canonicalize(&self.path) {
            return real;
        }
        match fs::read_link(&self.path) {
            Ok(target) => dir_of(&self.path).join(target),
            Err(_) => self.path.clone(),
        }
    }

    /// Directory holding the resolved bookmark file
    #[must_use]
    pub fn parent_dir(&self) -> PathBuf {
        dir_of(&self.resolved_path())
    }

    /// Decode a library from raw JSON bytes
    ///
    /// # Errors
    ///
    /// Returns `DbError::Json` if the bytes are not a bookmark array.
    pub fn decode(&self, raw: &[u8]) -> Result<BookmarkLibrary, DbError> {
        let bookmarks: Vec<Bookmark> = serde_json::from_slice(raw)?;
        Ok(BookmarkLibrary::from_bookmarks(bookmarks, self.unique_urls))
    }

    /// Encode a library as indented JSON with a trailing newline
    ///
    /// # Errors
    ///
    /// Returns `DbError::Json` if serialization fails.
    pub fn encode(library: &BookmarkLibrary) -> Result<Vec<u8>, DbError> {
        let mut raw = serde_json::to_vec_pretty(library.bookmarks())?;
        raw.push(b'\n');
        Ok(raw)
    }

    fn io_error(&self, source: std::io::Error) -> DbError {
        DbError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn dir_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

impl Storage for JsonStore {
    /// Read the bookmark file, creating an empty one if it does not exist
    fn load(&self) -> Result<BookmarkLibrary, DbError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No bookmark file at {}, creating one", self.path.display());
                let library = BookmarkLibrary::new(self.unique_urls);
                self.save(&library)?;
                return Ok(library);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let library = self.decode(&raw)?;
        library.verify()?;
        debug!("Loaded {} bookmark(s) from {}", library.len(), self.path.display());
        Ok(library)
    }

    fn save(&self, library: &BookmarkLibrary) -> Result<(), DbError> {
        library.verify()?;
        let raw = Self::encode(library)?;

        let target = self.resolved_path();
        let parent = dir_of(&target);
        fs::create_dir_all(&parent).map_err(|e| self.io_error(e))?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| self.io_error(e))?;
        temp.write_all(&raw).map_err(|e| self.io_error(e))?;
        // Keep the mode of the file being replaced
        if let Ok(existing) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| self.io_error(e))?;
        }
        temp.persist(&target).map_err(|e| DbError::AtomicWrite {
            path: self.path.clone(),
            source: e.error,
        })?;

        debug!("Saved {} bookmark(s) to {}", library.len(), self.path.display());
        Ok(())
    }
}
