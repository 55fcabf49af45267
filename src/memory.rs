//! In-memory filesystem.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::{File, FileHandle, FsError, FsOpen, Metadata};

/// A filesystem backed by a map from path to contents.
///
/// Names are compared component by component, so `conf//app.toml` and
/// `conf/app.toml/` find `conf/app.toml`, while `./conf/app.toml` and
/// `/conf/app.toml` are different names. Any proper prefix of a stored path
/// opens as a directory.
///
/// # Example
///
/// ```rust
/// use anyfs_stacked::{FsOpenExt, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::new().with_file("conf/app.toml", "port = 8080");
///
/// assert_eq!(fs.read_to_string(Path::new("conf/app.toml"))?, "port = 8080");
/// assert!(fs.stat(Path::new("conf"))?.is_dir());
/// # Ok::<(), anyfs_stacked::FsError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RwLock<BTreeMap<PathBuf, Arc<[u8]>>>,
}

impl MemoryFs {
    /// Create an empty in-memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return the filesystem, for builder-style setup.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Store `contents` at `path`, replacing any previous contents.
    ///
    /// Handles opened before the call keep reading the old contents.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let contents: Vec<u8> = contents.into();
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), contents.into());
    }

    /// Remove the file at `path`, returning `true` if it existed.
    pub fn remove(&self, path: &Path) -> bool {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path)
            .is_some()
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if no files are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

impl FsOpen for MemoryFs {
    fn open(&self, path: &Path) -> Result<FileHandle, FsError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(data) = files.get(path) {
            return Ok(Box::new(MemoryFile {
                meta: Metadata::file(entry_name(path), data.len() as u64),
                data: Cursor::new(Arc::clone(data)),
            }));
        }

        if files.keys().any(|stored| stored.starts_with(path)) {
            return Ok(Box::new(MemoryFile {
                meta: Metadata::dir(entry_name(path)),
                data: Cursor::new(Arc::from(&[][..])),
            }));
        }

        Err(FsError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Handle to an in-memory entry. Shares the stored bytes.
struct MemoryFile {
    meta: Metadata,
    data: Cursor<Arc<[u8]>>,
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.data.read(buf)
    }
}

impl File for MemoryFile {
    fn metadata(&self) -> Result<Metadata, FsError> {
        Ok(self.meta.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FsOpenExt;

    #[test]
    fn open_returns_contents() {
        let fs = MemoryFs::new().with_file("a.txt", "hello");
        assert_eq!(fs.read_to_string(Path::new("a.txt")).unwrap(), "hello");
    }

    #[test]
    fn missing_file_is_not_found() {
        let fs = MemoryFs::new();
        let result = fs.open(Path::new("a.txt"));
        assert!(matches!(result, Err(FsError::NotFound { .. })));
    }

    #[test]
    fn prefix_opens_as_directory() {
        let fs = MemoryFs::new().with_file("themes/dark/main.css", "");
        let meta = fs.stat(Path::new("themes/dark")).unwrap();
        assert!(meta.is_dir());
        assert_eq!(meta.name, "dark");
    }

    #[test]
    fn partial_component_is_not_a_directory() {
        let fs = MemoryFs::new().with_file("themes/dark.css", "");
        assert!(!fs.exists(Path::new("themes/da")).unwrap());
    }

    #[test]
    fn rooted_and_dotted_names_are_different_entries() {
        let fs = MemoryFs::new().with_file("a.txt", "x");
        assert!(!fs.exists(Path::new("/a.txt")).unwrap());
        assert!(!fs.exists(Path::new("./a.txt")).unwrap());
    }

    #[test]
    fn repeated_and_trailing_separators_match_stored_path() {
        let fs = MemoryFs::new().with_file("conf/app.toml", "port = 8080");
        assert_eq!(
            fs.read_to_string(Path::new("conf//app.toml")).unwrap(),
            "port = 8080"
        );
        assert_eq!(
            fs.read_to_string(Path::new("conf/app.toml/")).unwrap(),
            "port = 8080"
        );
    }

    #[test]
    fn open_handle_survives_replace() {
        let fs = MemoryFs::new().with_file("a.txt", "old");
        let mut handle = fs.open(Path::new("a.txt")).unwrap();
        fs.insert("a.txt", "new");

        let mut out = String::new();
        handle.read_to_string(&mut out).unwrap();
        assert_eq!(out, "old");
        assert_eq!(fs.read_to_string(Path::new("a.txt")).unwrap(), "new");
    }

    #[test]
    fn remove_and_len() {
        let fs = MemoryFs::new().with_file("a", "1").with_file("b", "2");
        assert_eq!(fs.len(), 2);
        assert!(fs.remove(Path::new("a")));
        assert!(!fs.remove(Path::new("a")));
        assert_eq!(fs.len(), 1);
        assert!(!fs.is_empty());
    }

    #[test]
    fn file_metadata_reports_size() {
        let fs = MemoryFs::new().with_file("dir/a.txt", "hello");
        let meta = fs.stat(Path::new("dir/a.txt")).unwrap();
        assert_eq!(meta, Metadata::file("a.txt", 5));
    }
}
