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

//! src/core/mod.rs
//!
//! Core browser logic module
//!
//! This module contains the filesystem-facing pieces of the browser:
//! - The `FileSystem` collaborator and its `std::fs` implementation
//! - Path splitting used when restoring the last browsed folder
//! - Game folder detection (archive bundles and launch scripts)
//! - The directory listing model shown by the browser
//!
//! Nothing here knows about widgets, so all of it is testable without a
//! display server.

pub mod folder;
pub mod fs;
pub mod types;

pub use folder::{has_archive_extension, has_launch_script, is_archive_file, is_game_folder};
pub use fs::{split_path, DirEntryInfo, EntryKind, FileSystem, StdFileSystem};
pub use types::*;

#[cfg(test)]
mod tests;
