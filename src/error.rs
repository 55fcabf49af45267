//! Error types for stacked filesystem lookups.

use std::path::PathBuf;

/// Filesystem error type with contextual variants.
///
/// All error variants include relevant context (path, operation) where applicable.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use anyfs_stacked::FsError;
/// use std::path::PathBuf;
///
/// let err = FsError::NotFound { path: PathBuf::from("/missing") };
/// assert!(err.to_string().contains("/missing"));
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    // Path/File Errors
    /// Path does not exist in a single filesystem.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Every filesystem of a stack failed to open the path.
    ///
    /// `causes` holds one error per filesystem that was tried, in stack order.
    /// It is empty when the stack has no filesystems.
    #[error("not found in any of the {searched} underlying filesystems: {path}")]
    NotFoundInAny {
        /// Number of filesystems that were searched.
        searched: usize,
        /// The requested path, exactly as passed to `open`.
        path: PathBuf,
        /// The error each filesystem returned.
        causes: Vec<FsError>,
    },

    /// Expected a file but found something else.
    #[error("not a file: {path}")]
    NotAFile {
        /// The path that is not a file.
        path: PathBuf,
    },

    // Permission/Access Errors
    /// Permission denied for operation.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    // Data Errors
    /// Invalid data encountered.
    #[error("invalid data: {path} ({details})")]
    InvalidData {
        /// The path with invalid data.
        path: PathBuf,
        /// Details about the invalid data.
        details: String,
    },

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    // Backend/Operation Errors
    /// Generic backend error.
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Returns `true` for [`NotFound`](Self::NotFound) and
    /// [`NotFoundInAny`](Self::NotFoundInAny).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotFoundInAny { .. })
    }

    /// Per-filesystem errors behind a [`NotFoundInAny`](Self::NotFoundInAny).
    ///
    /// Empty for every other variant.
    pub fn causes(&self) -> &[FsError] {
        match self {
            Self::NotFoundInAny { causes, .. } => causes,
            _ => &[],
        }
    }

    /// Attach a path and operation to an I/O error.
    ///
    /// `NotFound` and `PermissionDenied` kinds become the matching variants so
    /// a stack treats them like any other miss; everything else is kept as
    /// [`Io`](Self::Io) with its source.
    ///
    /// ```rust
    /// use anyfs_stacked::FsError;
    ///
    /// let err = FsError::io("write", "out/report.txt", std::io::Error::other("disk full"));
    /// assert_eq!(err.to_string(), "write failed for out/report.txt: disk full");
    /// ```
    pub fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, operation },
            _ => FsError::Io {
                operation,
                path,
                source,
            },
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(error: std::io::Error) -> Self {
        FsError::io("io", PathBuf::new(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn fs_error_not_found_display() {
        let err = FsError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "not found: /missing");
    }

    #[test]
    fn fs_error_not_found_in_any_display() {
        let err = FsError::NotFoundInAny {
            searched: 3,
            path: PathBuf::from("themes/dark.css"),
            causes: vec![],
        };
        assert_eq!(
            err.to_string(),
            "not found in any of the 3 underlying filesystems: themes/dark.css"
        );
    }

    #[test]
    fn is_not_found_covers_both_variants() {
        assert!(FsError::NotFound { path: "a".into() }.is_not_found());
        assert!(
            FsError::NotFoundInAny {
                searched: 0,
                path: "a".into(),
                causes: vec![],
            }
            .is_not_found()
        );
        assert!(
            !FsError::PermissionDenied {
                path: "a".into(),
                operation: "open",
            }
            .is_not_found()
        );
    }

    #[test]
    fn causes_empty_for_other_variants() {
        assert!(FsError::Backend("down".into()).causes().is_empty());
    }

    #[test]
    fn causes_keep_stack_order() {
        let err = FsError::NotFoundInAny {
            searched: 2,
            path: "x".into(),
            causes: vec![
                FsError::PermissionDenied {
                    path: "x".into(),
                    operation: "open",
                },
                FsError::NotFound { path: "x".into() },
            ],
        };
        assert!(matches!(err.causes()[0], FsError::PermissionDenied { .. }));
        assert!(matches!(err.causes()[1], FsError::NotFound { .. }));
    }

    #[test]
    fn fs_error_from_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let fs_err = FsError::from(io_err);
        assert!(matches!(fs_err, FsError::NotFound { .. }));
    }

    #[test]
    fn fs_error_from_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let fs_err = FsError::from(io_err);
        assert!(matches!(fs_err, FsError::PermissionDenied { .. }));
    }

    #[test]
    fn fs_error_io_keeps_context() {
        let io_err = std::io::Error::other("disk on fire");
        let fs_err = FsError::io("read", "/etc/app.toml", io_err);
        assert_eq!(
            fs_err.to_string(),
            "read failed for /etc/app.toml: disk on fire"
        );
    }

    #[test]
    fn fs_error_io_maps_missing_and_denied_kinds() {
        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            FsError::io("create_dir_all", "themes", missing),
            FsError::NotFound { path } if path == Path::new("themes")
        ));
        assert!(matches!(
            FsError::io("write", "themes/a.css", denied),
            FsError::PermissionDenied { operation: "write", .. }
        ));
    }
}
