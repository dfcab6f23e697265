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

//! Recent-path history
//!
//! An ordered, most-recent-first list of launched paths, deduplicated by
//! exact string equality and persisted to `recentpath.xml`:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <RecentPathList><Item Path="/games/a"/><Item Path="/games/b"/></RecentPathList>
//! ```
//!
//! Every mutation is saved immediately. Persistence is best effort: save
//! failures are logged and dropped, load failures give an empty history.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::{xml, ConfigError};
use crate::core::FileSystem;

/// File name of the history file inside the preference directory.
pub const HISTORY_FILE: &str = "recentpath.xml";

const HISTORY_ROOT: &str = "RecentPathList";

/// What happened when the history file was loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// File read and parsed
    Loaded,
    /// No file yet
    Missing,
    /// File exists but could not be read or parsed
    Corrupt,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct HistoryDocument {
    #[serde(rename = "Item", default)]
    items: Vec<HistoryItem>,
}

#[derive(Debug, Deserialize, Serialize)]
struct HistoryItem {
    #[serde(rename = "@Path", default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

/// Recent-path history bound to one XML file.
///
/// # Example
///
/// ```no_run
/// use vn_launcher::history::HistoryStore;
///
/// let mut history = HistoryStore::load("/tmp/prefs/recentpath.xml");
/// history.add("/games/a");
/// history.add("/games/b");
/// history.add("/games/a");
/// assert_eq!(history.entries(), vec!["/games/a", "/games/b"]);
/// ```
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: VecDeque<String>,
    status: LoadStatus,
}

impl HistoryStore {
    /// Loads the history at `path`, degrading to empty on any failure.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let (entries, status) = match xml::read_document::<HistoryDocument>(&path) {
            Ok(document) => {
                let entries = document.items.into_iter().filter_map(|item| item.path).collect();
                (entries, LoadStatus::Loaded)
            }
            Err(ConfigError::NotFound(_)) => {
                debug!(path = %path.display(), "no history file, first launch");
                (VecDeque::new(), LoadStatus::Missing)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "history file unreadable, starting empty");
                (VecDeque::new(), LoadStatus::Corrupt)
            }
        };

        Self { path, entries, status }
    }

    /// Loads `recentpath.xml` from the preference directory.
    pub fn load_from_dir(pref_dir: &Path) -> Self {
        Self::load(pref_dir.join(HISTORY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_status(&self) -> LoadStatus {
        self.status
    }

    /// True when no usable history file was found at load time.
    pub fn is_first_launch(&self) -> bool {
        self.status != LoadStatus::Loaded
    }

    /// Navigation to the last browsed folder is skipped for a session whose
    /// history file was unreadable.
    pub fn allows_navigation_restore(&self) -> bool {
        self.status != LoadStatus::Corrupt
    }

    /// Unfiltered entries, most recent first.
    pub fn entries(&self) -> Vec<&str> {
        self.entries.iter().map(String::as_str).collect()
    }

    pub fn front(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    /// Moves `path` to the front, inserting it if needed, and saves.
    ///
    /// No-op (and no write) when `path` is already the most recent entry.
    pub fn add(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.front() == Some(path.as_str()) {
            return;
        }

        self.take(&path);
        self.entries.push_front(path);
        self.persist();
    }

    /// Removes `path` if present and saves. Absent paths are a no-op.
    pub fn remove(&mut self, path: &str) {
        if self.take(path) {
            self.persist();
        }
    }

    /// Entries whose target still exists, most recent first.
    ///
    /// Stale entries are dropped from the history and, if any were dropped,
    /// the pruned history is saved.
    pub fn list(&mut self, fs: &dyn FileSystem) -> Vec<String> {
        let before = self.entries.len();
        self.entries.retain(|entry| fs.exists(Path::new(entry)));

        let pruned = before - self.entries.len();
        if pruned > 0 {
            debug!(pruned, "dropped stale history entries");
            self.persist();
        }

        self.entries.iter().cloned().collect()
    }

    /// Writes the history file.
    ///
    /// An empty history is not written when no file exists yet.
    pub fn save(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() && !self.path.exists() {
            return Ok(());
        }

        let document = HistoryDocument {
            items: self
                .entries
                .iter()
                .map(|entry| HistoryItem {
                    path: Some(entry.clone()),
                })
                .collect(),
        };

        xml::write_document(&self.path, HISTORY_ROOT, &document)
    }

    /// Removes the first occurrence of `path`; returns whether it was present.
    fn take(&mut self, path: &str) -> bool {
        match self.entries.iter().position(|entry| entry == path) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "failed to save history");
        }
    }
}

#[cfg(test)]
mod tests;
