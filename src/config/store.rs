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

//! Key-value configuration stores
//!
//! Preference items never hold a value themselves: every read goes through
//! a typed getter with a default, every write through a typed setter that
//! persists immediately. [`ConfigStore`] is that interface. Values are
//! kept as strings and parsed on read, like the XML they are stored in.

use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::config::{xml, ConfigError};

/// Root element name of the global preference file.
pub const GLOBAL_PREFERENCE_ROOT: &str = "GlobalPreference";

/// File name of the global preference file inside the preference directory.
pub const GLOBAL_PREFERENCE_FILE: &str = "GlobalPreference.xml";

/// Typed key-value store shared by everything that binds to a setting.
///
/// Implementors provide raw string access; the typed accessors are built
/// on top. Setters take `&self` because stores are shared through `Rc`
/// on the UI thread.
pub trait ConfigStore {
    /// Raw stored value, if any.
    fn raw(&self, key: &str) -> Option<String>;

    /// Stores a raw value and persists it.
    fn set_raw(&self, key: &str, value: String);

    /// Booleans accept `true`/`false` and any integer (non-zero is true).
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.raw(key) {
            Some(value) => match value.trim() {
                "true" => true,
                "false" => false,
                other => other.parse::<i64>().map(|v| v != 0).unwrap_or(default),
            },
            None => default,
        }
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.raw(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }

    fn get_float(&self, key: &str, default: f32) -> f32 {
        self.raw(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.raw(key).unwrap_or_else(|| default.to_string())
    }

    /// Booleans are persisted through the integer setter as `0`/`1`.
    fn set_bool(&self, key: &str, value: bool) {
        self.set_int(key, i64::from(value));
    }

    fn set_int(&self, key: &str, value: i64) {
        self.set_raw(key, value.to_string());
    }

    fn set_float(&self, key: &str, value: f32) {
        self.set_raw(key, value.to_string());
    }

    fn set_string(&self, key: &str, value: &str) {
        self.set_raw(key, value.to_string());
    }
}

/// Store that lives only in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `pairs`.
    pub fn with_values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RefCell::new(values),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }
}

/// On-disk document shape: `<Root><Item key=".." value=".."/>...</Root>`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct PreferenceDocument {
    #[serde(rename = "Item", default)]
    pub items: Vec<PreferenceEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct PreferenceEntry {
    #[serde(rename = "@key")]
    pub key: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

/// Store persisted to an XML file, rewritten on every change.
///
/// # Example
///
/// ```no_run
/// use vn_launcher::config::{ConfigStore, XmlConfigStore};
///
/// let store = XmlConfigStore::open("/tmp/prefs/GlobalPreference.xml");
/// store.set_bool("showfps", true);
/// assert!(store.get_bool("showfps", false));
/// ```
#[derive(Debug)]
pub struct XmlConfigStore {
    path: PathBuf,
    root: String,
    values: RefCell<BTreeMap<String, String>>,
}

impl XmlConfigStore {
    /// Opens the global preference file, starting empty if it is missing
    /// or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_root(path, GLOBAL_PREFERENCE_ROOT)
    }

    /// Like [`XmlConfigStore::open`] with a custom root element name.
    pub fn open_with_root(path: impl Into<PathBuf>, root: &str) -> Self {
        let path = path.into();
        match Self::load_with_root(&path, root) {
            Ok(store) => store,
            Err(ConfigError::NotFound(_)) => {
                debug!(path = %path.display(), "no preference file yet, starting empty");
                Self::empty(path, root)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable preference file");
                Self::empty(path, root)
            }
        }
    }

    /// Strictly loads an existing file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file is missing and
    /// `ConfigError::Parse` if it is malformed.
    pub fn load_with_root(path: &Path, root: &str) -> Result<Self, ConfigError> {
        let document: PreferenceDocument = xml::read_document(path)?;
        let values = document
            .items
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            root: root.to_string(),
            values: RefCell::new(values),
        })
    }

    fn empty(path: PathBuf, root: &str) -> Self {
        Self {
            path,
            root: root.to_string(),
            values: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every value to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let document = PreferenceDocument {
            items: self
                .values
                .borrow()
                .iter()
                .map(|(key, value)| PreferenceEntry {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        };

        xml::write_document(&self.path, &self.root, &document)
    }
}

impl ConfigStore for XmlConfigStore {
    fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) {
        self.values.borrow_mut().insert(key.to_string(), value);

        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), key, error = %e, "failed to persist preference");
        }
    }
}
