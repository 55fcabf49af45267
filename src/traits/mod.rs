//! Provider traits.

mod fs_open;

pub use fs_open::{File, FileHandle, FsOpen};
