//! # anyfs-stacked
//!
//! A **stacked filesystem**: one read-only view over an ordered list of
//! filesystems, where each lookup is answered by the first filesystem that
//! can open the name.
//!
//! This is the usual shape of configuration layering, theming and plugin
//! overrides: look in the user's override directory first, then in the
//! bundled defaults.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use anyfs_stacked::{FsOpen, FsOpenExt, MemoryFs, StackedFs};
//! use std::path::Path;
//!
//! let fs = StackedFs::new([
//!     MemoryFs::new().with_file("a.txt", "hello"),
//!     MemoryFs::new().with_file("b.txt", "world"),
//! ]);
//!
//! assert_eq!(fs.read_to_string(Path::new("a.txt"))?, "hello");
//! assert_eq!(fs.read_to_string(Path::new("b.txt"))?, "world");
//!
//! let err = fs.open(Path::new("c.txt")).err().unwrap();
//! assert_eq!(
//!     err.to_string(),
//!     "not found in any of the 2 underlying filesystems: c.txt"
//! );
//! # Ok::<(), anyfs_stacked::FsError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`FsOpen`] | The provider contract: open a file by name |
//! | [`File`] | An opened file; `Read` plus [`Metadata`] |
//! | [`StackedFs`] | First-match resolution over a list of [`FsOpen`] |
//! | [`FsError`] | Error type with context |
//! | [`MemoryFs`] | In-memory provider |
//! | [`DirFs`] | Provider rooted at a directory on disk |
//! | [`FallbackLayer`] | Puts defaults under an existing filesystem |
//!
//! ---
//!
//! ## Resolution Rules
//!
//! - Filesystems are asked in registration order; the first `Ok` wins and
//!   later filesystems are not asked.
//! - Any error counts as a miss, whatever its kind.
//! - When every filesystem misses, [`FsError::NotFoundInAny`] reports how many
//!   were searched and the requested name; [`FsError::causes`] keeps each
//!   individual error.
//! - Handles are returned exactly as the winning filesystem produced them.
//! - Nothing is cached.
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and all methods take `&self`. A
//! [`StackedFs`] can be shared through `Arc` and filesystems can be appended
//! while other threads are resolving; each lookup scans a consistent snapshot.
//!
//! ---
//!
//! ## Logging
//!
//! Resolution emits [`tracing`] events: `debug` for the filesystem that
//! answered or for a total miss, `trace` for every individual miss. The crate
//! never installs a subscriber.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`Metadata`] and [`FileType`], plus `FsOpenExtJson` |

// Private modules
mod dir;
mod error;
mod ext;
mod layer;
mod memory;
mod stacked;
mod traits;
mod types;

// Public re-exports - error types
pub use error::FsError;

// Public re-exports - core types
pub use types::{FileType, Metadata};

// Public re-exports - provider traits
pub use traits::{File, FileHandle, FsOpen};

// Public re-exports - stacking
pub use stacked::StackedFs;

// Public re-exports - providers
pub use dir::DirFs;
pub use memory::MemoryFs;

// Public re-exports - infrastructure
pub use ext::FsOpenExt;
pub use layer::{FallbackLayer, Layer, LayerExt};

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::FsOpenExtJson;
