//! Files under a directory on disk.

use std::io::Read;
use std::path::{Component, Path, PathBuf};

use crate::{File, FileHandle, FsError, FsOpen, Metadata};

/// A filesystem rooted at a directory on disk.
///
/// Names are relative to the root. Absolute names and names containing `..`
/// are refused with [`FsError::PermissionDenied`] so a lookup cannot leave
/// the root. Symlinks inside the root are followed by the OS.
///
/// # Example
///
/// ```rust,no_run
/// use anyfs_stacked::{DirFs, MemoryFs, StackedFs};
///
/// let fs = StackedFs::empty()
///     .with_fs(DirFs::new("/home/me/.config/app"))
///     .with_fs(MemoryFs::new().with_file("app.toml", "port = 8080"));
/// ```
#[derive(Debug, Clone)]
pub struct DirFs {
    root: PathBuf,
}

impl DirFs {
    /// Create a filesystem rooted at `root`.
    ///
    /// The root is not checked here; a missing root makes every lookup fail
    /// with [`FsError::NotFound`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory lookups are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, FsError> {
        let escapes = path.components().any(|c| {
            matches!(
                c,
                Component::RootDir | Component::Prefix(_) | Component::ParentDir
            )
        });
        if escapes {
            return Err(FsError::PermissionDenied {
                path: path.to_path_buf(),
                operation: "open",
            });
        }
        Ok(self.root.join(path))
    }
}

impl FsOpen for DirFs {
    fn open(&self, path: &Path) -> Result<FileHandle, FsError> {
        let full = self.resolve(path)?;
        let meta = std::fs::metadata(&full).map_err(|e| FsError::io("open", path, e))?;

        let name = full
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if meta.is_dir() {
            return Ok(Box::new(DirEntryHandle { name }));
        }

        let file = std::fs::File::open(&full).map_err(|e| FsError::io("open", path, e))?;
        Ok(Box::new(DiskFile {
            file,
            name,
            path: path.to_path_buf(),
        }))
    }
}

struct DiskFile {
    file: std::fs::File,
    name: String,
    path: PathBuf,
}

impl Read for DiskFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}

impl File for DiskFile {
    fn metadata(&self) -> Result<Metadata, FsError> {
        let meta = self
            .file
            .metadata()
            .map_err(|e| FsError::io("stat", &self.path, e))?;
        let mut out = Metadata::file(self.name.clone(), meta.len());
        if let Ok(modified) = meta.modified() {
            out.modified = modified;
        }
        Ok(out)
    }
}

/// A directory opened through [`DirFs`]. Reads as empty.
struct DirEntryHandle {
    name: String,
}

impl Read for DirEntryHandle {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(0)
    }
}

impl File for DirEntryHandle {
    fn metadata(&self) -> Result<Metadata, FsError> {
        Ok(Metadata::dir(self.name.clone()))
    }
}
