// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core data types for the file browser
//!
//! Defines the listing model shown by the browser and the small size type
//! shared by the menu geometry and preference items.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::fs::{DirEntryInfo, FileSystem};

/// A 2D extent in toolkit units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wider than tall
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One row of the browser listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    /// Leaf name as displayed
    pub name: String,
    /// Lowercased name used for sorting and comparisons
    pub name_for_compare: String,
    /// Absolute path of the entry
    pub full_path: PathBuf,
    pub is_dir: bool,
}

impl FileInfo {
    pub fn new(parent: &Path, entry: &DirEntryInfo) -> Self {
        Self {
            name: entry.name.clone(),
            name_for_compare: entry.name.to_lowercase(),
            full_path: parent.join(&entry.name),
            is_dir: entry.is_dir(),
        }
    }
}

impl Ord for FileInfo {
    /// Directories first, then case-insensitive name order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .is_dir
            .cmp(&self.is_dir)
            .then_with(|| self.name_for_compare.cmp(&other.name_for_compare))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.full_path.cmp(&other.full_path))
    }
}

impl PartialOrd for FileInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lists `dir` for display: hidden and non-file/non-directory entries are
/// dropped and the rest sorted directories-first.
///
/// An unreadable directory yields an empty listing.
pub fn read_listing(fs: &dyn FileSystem, dir: &Path) -> Vec<FileInfo> {
    let mut list: Vec<FileInfo> = fs
        .list_dir(dir)
        .unwrap_or_default()
        .iter()
        .filter(|entry| !entry.is_hidden() && (entry.is_dir() || entry.is_file()))
        .map(|entry| FileInfo::new(dir, entry))
        .collect();

    list.sort();
    list
}
