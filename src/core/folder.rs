//! Game folder detection
//!
//! A folder is launchable when it holds the engine's launch script
//! directly, or when an archive bundle sits anywhere below it. The archive
//! search is depth-first and stops at the first hit; only existence
//! matters, so traversal order is whatever the listing returns.

use std::path::Path;

use tracing::debug;

use crate::core::fs::FileSystem;

/// Archive extensions recognised as packaged game content (lowercase, with dot).
pub const ARCHIVE_EXTENSIONS: &[&str] = &[".xp3"];

/// Script whose presence marks a folder as a loose (unpacked) game.
pub const LAUNCH_SCRIPT: &str = "startup.tjs";

/// True if `name` ends with a known archive extension (case-insensitive).
pub fn has_archive_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    match lower.rfind('.') {
        Some(pos) => ARCHIVE_EXTENSIONS.contains(&&lower[pos..]),
        None => false,
    }
}

/// True if `path` is an existing regular file with an archive extension.
pub fn is_archive_file(fs: &dyn FileSystem, path: &Path) -> bool {
    fs.is_file(path)
        && path
            .file_name()
            .map(|name| has_archive_extension(&name.to_string_lossy()))
            .unwrap_or(false)
}

/// True if `dir` directly contains the launch script (exact name).
pub fn has_launch_script(fs: &dyn FileSystem, dir: &Path) -> bool {
    fs.list_dir(dir)
        .map(|entries| {
            entries
                .iter()
                .any(|entry| entry.is_file() && entry.name == LAUNCH_SCRIPT)
        })
        .unwrap_or(false)
}

/// True if an archive file exists anywhere under `dir`.
///
/// Hidden entries are skipped and unreadable directories count as empty.
/// Linked archives count, but linked directories are not descended into,
/// so links pointing back up the tree cannot loop the walk.
pub fn contains_archive(fs: &dyn FileSystem, dir: &Path) -> bool {
    let entries = match fs.list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "cannot list directory");
            return false;
        }
    };

    let mut sub_dirs = Vec::new();
    for entry in entries {
        if entry.name.is_empty() || entry.is_hidden() {
            continue;
        }
        if entry.is_file() && has_archive_extension(&entry.name) {
            return true;
        }
        if entry.is_dir() && !entry.is_symlink {
            sub_dirs.push(dir.join(&entry.name));
        }
    }

    sub_dirs.iter().any(|sub| contains_archive(fs, sub))
}

/// Returns whether `dir` can be handed to the launcher.
///
/// # Example
///
/// ```no_run
/// use vn_launcher::core::{is_game_folder, StdFileSystem};
/// use std::path::Path;
///
/// if is_game_folder(&StdFileSystem, Path::new("/sdcard/games/fate")) {
///     println!("launchable");
/// }
/// ```
pub fn is_game_folder(fs: &dyn FileSystem, dir: &Path) -> bool {
    fs.is_dir(dir) && (has_launch_script(fs, dir) || contains_archive(fs, dir))
}
