//! User theme overrides on top of bundled defaults.
//!
//! Run with: `cargo run --example theme_override -- [override-dir]`
//!
//! Without an argument a temporary override directory is created.

use anyfs_stacked::{DirFs, FallbackLayer, FsError, FsOpenExt, LayerExt, MemoryFs};
use std::path::{Path, PathBuf};

fn bundled_theme() -> MemoryFs {
    MemoryFs::new()
        .with_file("theme/colors.css", ":root { --fg: black; --bg: white; }")
        .with_file("theme/fonts.css", ":root { --font: serif; }")
        .with_file("theme/layout.css", "main { max-width: 60em; }")
}

fn main() -> Result<(), FsError> {
    let override_dir = match std::env::args_os().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => {
            let dir = std::env::temp_dir().join("anyfs-stacked-theme-demo");
            let theme_dir = dir.join("theme");
            std::fs::create_dir_all(&theme_dir)
                .map_err(|e| FsError::io("create_dir_all", &theme_dir, e))?;
            let colors = theme_dir.join("colors.css");
            std::fs::write(&colors, ":root { --fg: #eee; --bg: #111; }")
                .map_err(|e| FsError::io("write", &colors, e))?;
            dir
        }
    };

    let fs = DirFs::new(&override_dir).layer(FallbackLayer::new(bundled_theme()));

    for name in [
        "theme/colors.css",
        "theme/fonts.css",
        "theme/layout.css",
        "theme/print.css",
    ] {
        match fs.read_to_string(Path::new(name)) {
            Ok(css) => println!("{name}: {css}"),
            Err(e) => println!("{name}: {e}"),
        }
    }

    Ok(())
}
