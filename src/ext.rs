//! # Extension Traits
//!
//! Convenience methods on top of [`FsOpen`].
//!
//! ## Overview
//!
//! [`FsOpenExt`] provides the reads most callers actually want. The methods
//! have default implementations with a blanket implementation, so any `FsOpen`
//! (a [`StackedFs`](crate::StackedFs) included) gets them for free.
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`read`](FsOpenExt::read) | Read a whole file as bytes |
//! | [`read_to_string`](FsOpenExt::read_to_string) | Read a whole file as UTF-8 |
//! | [`exists`](FsOpenExt::exists) | Check whether a path opens |
//! | [`stat`](FsOpenExt::stat) | Metadata of the opened entry |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature enabled, `read_json` is also available.
//!
//! Enable with:
//! ```toml
//! [dependencies]
//! anyfs-stacked = { version = "0.1", features = ["serde"] }
//! ```

use crate::{FsError, FsOpen, Metadata};
use std::io::Read;
use std::path::Path;

/// Extension methods for any [`FsOpen`].
///
/// # Example
///
/// ```rust
/// use anyfs_stacked::{FsError, FsOpen, FsOpenExt};
/// use std::path::Path;
///
/// fn load_banner<F: FsOpen>(fs: &F) -> Result<String, FsError> {
///     if fs.exists(Path::new("banner.txt"))? {
///         fs.read_to_string(Path::new("banner.txt"))
///     } else {
///         Ok(String::from("welcome"))
///     }
/// }
/// ```
pub trait FsOpenExt: FsOpen {
    /// Read the entire file as bytes.
    ///
    /// # Errors
    ///
    /// - any error from [`open`](FsOpen::open)
    /// - [`FsError::NotAFile`] if `path` opened as a directory
    /// - [`FsError::Io`] if reading the opened handle fails
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let mut file = self.open(path)?;
        if file.metadata()?.is_dir() {
            return Err(FsError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| FsError::io("read", path, e))?;
        Ok(data)
    }

    /// Read the entire file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Everything [`read`](Self::read) returns, plus
    /// [`FsError::InvalidData`] if the contents are not UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|_| FsError::InvalidData {
            path: path.to_path_buf(),
            details: "not valid UTF-8".into(),
        })
    }

    /// Check whether `path` can be opened.
    ///
    /// Returns `Ok(false)` for not-found errors (not an error).
    /// Returns `Err` for everything else (permission denied, etc.).
    fn exists(&self, path: &Path) -> Result<bool, FsError> {
        match self.open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Open `path` and return the metadata of the opened entry.
    fn stat(&self, path: &Path) -> Result<Metadata, FsError> {
        self.open(path)?.metadata()
    }
}

// Blanket implementation - any FsOpen gets FsOpenExt for free
impl<F: FsOpen + ?Sized> FsOpenExt for F {}

// =============================================================================
// JSON Support (Feature-Gated)
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::de::DeserializeOwned;

    /// JSON extension methods.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait FsOpenExtJson: FsOpen {
        /// Read a file and deserialize it as JSON.
        ///
        /// # Errors
        ///
        /// - any error from [`read_to_string`](FsOpenExt::read_to_string)
        /// - `FsError::Deserialization` if JSON parsing failed
        ///
        /// # Example
        ///
        /// ```rust
        /// use anyfs_stacked::{FsError, FsOpen};
        /// #[cfg(feature = "serde")]
        /// use anyfs_stacked::FsOpenExtJson;
        /// use std::path::Path;
        ///
        /// #[cfg(feature = "serde")]
        /// fn load_config<F: FsOpen>(fs: &F) -> Result<serde_json::Value, FsError> {
        ///     fs.read_json(Path::new("config.json"))
        /// }
        /// ```
        fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, FsError> {
            let data = self.read_to_string(path)?;
            serde_json::from_str(&data).map_err(|e| FsError::Deserialization(e.to_string()))
        }
    }

    // Blanket implementation
    impl<F: FsOpen + ?Sized> FsOpenExtJson for F {}
}

#[cfg(feature = "serde")]
pub use json::FsOpenExtJson;
