//! # Layer Trait
//!
//! Tower-style composition for filesystems.
//!
//! ## Overview
//!
//! The [`Layer`] trait wraps a filesystem to produce another one. The crate
//! ships [`FallbackLayer`], which places a filesystem of defaults underneath:
//!
//! ```text
//! user_dir ──▶ FallbackLayer(bundled) ──▶ StackedFs[user_dir, bundled]
//! ```
//!
//! ## Fluent Composition
//!
//! Use [`LayerExt`] for fluent chaining:
//!
//! ```rust
//! use anyfs_stacked::{FallbackLayer, FsOpenExt, LayerExt, MemoryFs};
//! use std::path::Path;
//!
//! let user = MemoryFs::new().with_file("app.toml", "port = 9000");
//! let site = MemoryFs::new().with_file("log.toml", "level = 'warn'");
//! let bundled = MemoryFs::new()
//!     .with_file("app.toml", "port = 8080")
//!     .with_file("log.toml", "level = 'info'");
//!
//! let fs = user
//!     .layer(FallbackLayer::new(site))
//!     .layer(FallbackLayer::new(bundled));
//!
//! assert_eq!(fs.read_to_string(Path::new("app.toml"))?, "port = 9000");
//! assert_eq!(fs.read_to_string(Path::new("log.toml"))?, "level = 'warn'");
//! # Ok::<(), anyfs_stacked::FsError>(())
//! ```

use std::any::Any;

use crate::{FsOpen, StackedFs};

/// A layer that wraps a filesystem to add functionality.
///
/// Inspired by Tower's `Layer` trait.
///
/// # Type Parameters
///
/// - `B`: The filesystem type being wrapped
///
/// # Example
///
/// ```rust
/// use anyfs_stacked::Layer;
///
/// struct Tagged<B> {
///     inner: B,
///     tag: &'static str,
/// }
///
/// struct TagLayer(&'static str);
///
/// impl<B> Layer<B> for TagLayer {
///     type Backend = Tagged<B>;
///
///     fn layer(self, backend: B) -> Self::Backend {
///         Tagged { inner: backend, tag: self.0 }
///     }
/// }
/// ```
pub trait Layer<B> {
    /// The resulting filesystem type after applying this layer.
    type Backend;

    /// Wrap the given filesystem with this layer's functionality.
    ///
    /// Consumes both the layer configuration and the filesystem.
    fn layer(self, backend: B) -> Self::Backend;
}

/// Extension trait for fluent layer composition.
///
/// Provides `.layer()` on any [`FsOpen`].
pub trait LayerExt: FsOpen + Sized {
    /// Apply a layer to this filesystem.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Backend {
        layer.layer(self)
    }
}

// Blanket implementation - any FsOpen gets LayerExt for free
impl<B: FsOpen> LayerExt for B {}

/// Puts a filesystem of defaults below the wrapped one.
///
/// Lookups go to the wrapped filesystem first and fall through to the
/// defaults when it fails. Applying the layer to a filesystem that is already
/// a [`StackedFs`] appends the defaults to that stack, so chained fallbacks
/// form one flat stack and a miss counts every filesystem searched.
#[derive(Debug, Clone)]
pub struct FallbackLayer<D> {
    defaults: D,
}

impl<D: FsOpen + 'static> FallbackLayer<D> {
    /// Create a layer that falls back to `defaults`.
    pub fn new(defaults: D) -> Self {
        Self { defaults }
    }
}

impl<B, D> Layer<B> for FallbackLayer<D>
where
    B: FsOpen + 'static,
    D: FsOpen + 'static,
{
    type Backend = StackedFs;

    fn layer(self, backend: B) -> StackedFs {
        // An owned stack is extended in place; anything else becomes its first level.
        let mut slot = Some(backend);
        let taken = (&mut slot as &mut dyn Any)
            .downcast_mut::<Option<StackedFs>>()
            .and_then(Option::take);
        let stack = taken.unwrap_or_else(|| StackedFs::new(slot));
        stack.with_fs(self.defaults)
    }
}
