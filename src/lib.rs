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

//! VN Launcher
//!
//! Front end of a visual novel player: browse the filesystem for game
//! folders, remember what was played, and edit the engine's preferences.
//!
//! # Features
//!
//! - **Game Detection:** A folder is launchable when it holds `startup.tjs`
//!   or an `.xp3` archive anywhere below it
//! - **Recent Paths:** Most-recent-first history persisted to XML, pruned of
//!   paths that no longer exist
//! - **Declarative Preferences:** Settings described once, rendered as bound
//!   controls that persist every change
//! - **Slide-in Menu:** Explicit shown/hidden state with eased transitions
//! - **GTK4 Interface:** Optional, behind the `gui` feature
//!
//! # Architecture
//!
//! - **`core`:** Filesystem abstraction, listings, game folder detection
//! - **`config`:** Preference stores and XML persistence
//! - **`history`:** Recent-path history
//! - **`locale`:** Caption lookup
//! - **`prefs`:** Preference descriptors, bound items, screens
//! - **`ui`:** Controller, menu state machine, launcher, GTK4 view
//!
//! # Examples
//!
//! ## Checking a folder
//!
//! ```no_run
//! use vn_launcher::core::{is_game_folder, StdFileSystem};
//! use std::path::Path;
//!
//! if is_game_folder(&StdFileSystem, Path::new("/games/fate")) {
//!     println!("Ready to play");
//! }
//! ```
//!
//! ## Recording a launch
//!
//! ```no_run
//! use vn_launcher::history::HistoryStore;
//!
//! let mut history = HistoryStore::load("/tmp/recentpath.xml");
//! history.add("/games/fate");
//! assert_eq!(history.front(), Some("/games/fate"));
//! ```
//!
//! ## Showing preferences
//!
//! ```
//! use vn_launcher::config::MemoryConfigStore;
//! use vn_launcher::core::Size;
//! use vn_launcher::locale::LocaleTable;
//! use vn_launcher::prefs::{PreferenceRegistry, RegistryOptions};
//! use std::rc::Rc;
//!
//! let registry = PreferenceRegistry::new(RegistryOptions::global());
//! let env = registry.env(Rc::new(MemoryConfigStore::new()), Rc::new(LocaleTable::english()));
//! for item in registry.root().create_items(&env, Size::new(480.0, 48.0)) {
//!     println!("{}: {}", item.caption, item.value_text());
//! }
//! ```

pub mod config;
pub mod core;
pub mod history;
pub mod locale;
pub mod prefs;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigStore, MemoryConfigStore, XmlConfigStore};
pub use core::{is_game_folder, FileSystem, StdFileSystem};
pub use history::HistoryStore;
pub use locale::{Locale, LocaleTable};
pub use prefs::{PreferenceInfo, PreferenceRegistry};
pub use ui::{FileSelectorController, Launcher};
