//! Filesystem collaborator
//!
//! The browser, the history store and the folder check only ever need
//! three things from the filesystem: a directory listing with entry kinds
//! and two existence checks. They go through [`FileSystem`] so the
//! controller can be driven from tests without touching global state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a directory entry, as reported by the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, devices, dangling symlinks and so on
    Other,
}

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Leaf name (no parent components)
    pub name: String,
    pub kind: EntryKind,
    /// Entry is a symlink; `kind` describes its target
    pub is_symlink: bool,
}

impl DirEntryInfo {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Names starting with `.` are hidden from the browser.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Minimal filesystem interface used by the front-end.
pub trait FileSystem {
    /// Lists the direct children of `path`.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// True if `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// True if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// True if `path` exists as either a file or a directory.
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // Follow symlinks so a linked game folder still shows as a directory
            let kind = match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                Ok(meta) if meta.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };

            let is_symlink = entry
                .file_type()
                .map(|file_type| file_type.is_symlink())
                .unwrap_or(false);

            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
                is_symlink,
            });
        }

        Ok(entries)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Splits a path into `(parent, leaf)`.
///
/// The leaf is empty when the path has no final component (a root such as
/// `/`, or an empty path). Navigation code uses that to stop walking up.
///
/// # Example
///
/// ```
/// use vn_launcher::core::split_path;
/// use std::path::{Path, PathBuf};
///
/// let (parent, leaf) = split_path(Path::new("/games/fate/data.xp3"));
/// assert_eq!(parent, PathBuf::from("/games/fate"));
/// assert_eq!(leaf, "data.xp3");
///
/// let (_, leaf) = split_path(Path::new("/"));
/// assert!(leaf.is_empty());
/// ```
pub fn split_path(path: &Path) -> (PathBuf, String) {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(leaf)) => (parent.to_path_buf(), leaf.to_string_lossy().into_owned()),
        _ => (path.to_path_buf(), String::new()),
    }
}
