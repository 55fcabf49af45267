//! Open-by-name: the one capability a stacked filesystem needs.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::{FsError, Metadata};

/// An opened file or directory.
///
/// Released by dropping it. Whatever the provider needs to do on release
/// (closing a descriptor, returning a buffer to a pool) belongs in its `Drop`.
///
/// # Object Safety
///
/// This trait is object-safe and is normally used as `Box<dyn File>`.
pub trait File: Read + Send {
    /// Metadata of the opened entry.
    ///
    /// # Errors
    ///
    /// Provider-specific; an on-disk file may fail with [`FsError::Io`].
    fn metadata(&self) -> Result<Metadata, FsError>;
}

/// A file handle as returned by [`FsOpen::open`].
pub type FileHandle = Box<dyn File>;

/// Open a file by name.
///
/// This is the whole provider contract. In-memory maps, directories on disk,
/// archives and network stores all fit behind it, and so does
/// [`StackedFs`](crate::StackedFs) itself.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access; implementations use interior mutability for their own
/// state.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsOpen`.
///
/// # Example
///
/// ```rust
/// use anyfs_stacked::{FileHandle, FsError, FsOpen};
/// use std::path::Path;
///
/// /// A filesystem that contains nothing.
/// struct Nothing;
///
/// impl FsOpen for Nothing {
///     fn open(&self, path: &Path) -> Result<FileHandle, FsError> {
///         Err(FsError::NotFound { path: path.to_path_buf() })
///     }
/// }
///
/// assert!(Nothing.open(Path::new("a.txt")).is_err());
/// ```
pub trait FsOpen: Send + Sync {
    /// Open `path` for reading.
    ///
    /// The path is interpreted by the implementation; callers pass it through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if nothing exists at `path`
    /// - [`FsError::PermissionDenied`] if access is denied
    /// - any other variant for provider-specific failures
    fn open(&self, path: &Path) -> Result<FileHandle, FsError>;
}

impl<T: FsOpen + ?Sized> FsOpen for &T {
    fn open(&self, path: &Path) -> Result<FileHandle, FsError> {
        (**self).open(path)
    }
}

impl<T: FsOpen + ?Sized> FsOpen for Box<T> {
    fn open(&self, path: &Path) -> Result<FileHandle, FsError> {
        (**self).open(path)
    }
}

impl<T: FsOpen + ?Sized> FsOpen for Arc<T> {
    fn open(&self, path: &Path) -> Result<FileHandle, FsError> {
        (**self).open(path)
    }
}
