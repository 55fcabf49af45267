//! # Stacked Filesystem
//!
//! First-match resolution over an ordered list of filesystems.
//!
//! ## Overview
//!
//! [`StackedFs`] holds filesystems in priority order. [`open`](FsOpen::open)
//! asks each one in turn and returns the first handle it gets back:
//!
//! ```text
//! open("theme.css")
//!     ├─▶ [0] user overrides   ── NotFound ──▶ next
//!     ├─▶ [1] site defaults    ── Ok(handle) ──▶ return handle
//!     └─▶ [2] bundled defaults    (never asked)
//! ```
//!
//! Filesystems are only ever appended, so priority is fixed at registration
//! time. Nothing is cached; every `open` walks the list again.
//!
//! ## Concurrency
//!
//! The list is kept as an immutable snapshot. [`add_fs`](StackedFs::add_fs)
//! builds and publishes a new snapshot, and an `open` already in progress
//! keeps scanning the one it started with.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::{FileHandle, FsError, FsOpen};

type Snapshot = Arc<[Arc<dyn FsOpen>]>;

/// A filesystem that resolves each lookup against a stack of filesystems.
///
/// The filesystem registered first has the highest priority.
///
/// # Example
///
/// ```rust
/// use anyfs_stacked::{FsOpen, FsOpenExt, MemoryFs, StackedFs};
/// use std::path::Path;
///
/// let overrides = MemoryFs::new();
/// overrides.insert("theme.css", "body { color: red }");
///
/// let defaults = MemoryFs::new();
/// defaults.insert("theme.css", "body { color: black }");
/// defaults.insert("fonts.css", "body { font: serif }");
///
/// let fs = StackedFs::new([overrides, defaults]);
///
/// assert_eq!(fs.read_to_string(Path::new("theme.css"))?, "body { color: red }");
/// assert_eq!(fs.read_to_string(Path::new("fonts.css"))?, "body { font: serif }");
/// assert!(fs.open(Path::new("missing.css")).is_err());
/// # Ok::<(), anyfs_stacked::FsError>(())
/// ```
pub struct StackedFs {
    layers: RwLock<Snapshot>,
}

impl StackedFs {
    /// Create a stack from filesystems in priority order.
    pub fn new<I, F>(filesystems: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FsOpen + 'static,
    {
        filesystems.into_iter().collect()
    }

    /// Create a stack with no filesystems. Every lookup fails until one is added.
    pub fn empty() -> Self {
        Self::from_arcs(Vec::new())
    }

    fn from_arcs(layers: Vec<Arc<dyn FsOpen>>) -> Self {
        Self {
            layers: RwLock::new(layers.into()),
        }
    }

    /// Append a filesystem and return the stack, for builder-style setup.
    #[must_use]
    pub fn with_fs(self, filesystem: impl FsOpen + 'static) -> Self {
        self.add_fs(filesystem);
        self
    }

    /// Append a filesystem with the lowest priority.
    ///
    /// Handles that are already open are unaffected; only later lookups see
    /// the new filesystem.
    pub fn add_fs(&self, filesystem: impl FsOpen + 'static) {
        self.add_arc(Arc::new(filesystem));
    }

    /// Append a shared filesystem with the lowest priority.
    ///
    /// Use this to put the same filesystem in several stacks.
    pub fn add_arc(&self, filesystem: Arc<dyn FsOpen>) {
        let mut layers = self.layers.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Vec::with_capacity(layers.len() + 1);
        next.extend(layers.iter().cloned());
        next.push(filesystem);
        *layers = next.into();
        debug!(layers = layers.len(), "filesystem appended to stack");
    }

    /// Number of filesystems in the stack.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns `true` if the stack has no filesystems.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Snapshot {
        // The guarded value is replaced whole, so a poisoned lock still holds a
        // complete snapshot.
        let layers = self.layers.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*layers)
    }
}

impl FsOpen for StackedFs {
    /// Open `path` from the first filesystem that can open it.
    ///
    /// The handle is returned exactly as that filesystem produced it.
    ///
    /// # Errors
    ///
    /// [`FsError::NotFoundInAny`] when every filesystem failed, or the stack
    /// is empty. The individual failures are kept in
    /// [`FsError::causes`] in stack order.
    fn open(&self, path: &Path) -> Result<FileHandle, FsError> {
        let layers = self.snapshot();
        let mut causes = Vec::new();

        for (index, layer) in layers.iter().enumerate() {
            match layer.open(path) {
                Ok(file) => {
                    debug!(path = %path.display(), index, "resolved in stack");
                    return Ok(file);
                }
                Err(error) => {
                    trace!(path = %path.display(), index, %error, "stack layer miss");
                    causes.push(error);
                }
            }
        }

        debug!(path = %path.display(), searched = layers.len(), "not found in stack");
        Err(FsError::NotFoundInAny {
            searched: layers.len(),
            path: path.to_path_buf(),
            causes,
        })
    }
}

impl Default for StackedFs {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: FsOpen + 'static> FromIterator<F> for StackedFs {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::from_arcs(
            iter.into_iter()
                .map(|fs| Arc::new(fs) as Arc<dyn FsOpen>)
                .collect(),
        )
    }
}

impl<F: FsOpen + 'static> Extend<F> for StackedFs {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for filesystem in iter {
            self.add_fs(filesystem);
        }
    }
}

impl fmt::Debug for StackedFs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackedFs")
            .field("layers", &self.len())
            .finish()
    }
}
