//! Per-game ("local") preference files
//!
//! A game folder may carry its own preference file overriding the global
//! one. The menu offers "open local preferences" when it exists and
//! "create local preferences" when it doesn't.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{ConfigError, XmlConfigStore};
use crate::core::FileSystem;

/// File name of a game folder's local preference file.
pub const LOCAL_PREFERENCE_FILE: &str = "Kirikiroid2Preference.xml";

/// Root element name of a local preference file.
pub const LOCAL_PREFERENCE_ROOT: &str = "IndividualPreference";

/// Location of the local preference file for `dir`.
pub fn local_preference_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_PREFERENCE_FILE)
}

/// True if `dir` has a local preference file.
pub fn has_local_preference(fs: &dyn FileSystem, dir: &Path) -> bool {
    fs.is_file(&local_preference_path(dir))
}

/// Opens the local preference file of `dir`, if there is one.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` when `dir` has no local preference file
/// and `ConfigError::Parse` when it is malformed.
pub fn open_local_preference(dir: &Path) -> Result<XmlConfigStore, ConfigError> {
    XmlConfigStore::load_with_root(&local_preference_path(dir), LOCAL_PREFERENCE_ROOT)
}

/// Creates an empty local preference file in `dir` and opens it.
///
/// An existing file is opened as-is rather than overwritten.
pub fn create_local_preference_at(dir: &Path) -> Result<XmlConfigStore, ConfigError> {
    let path = local_preference_path(dir);
    if path.exists() {
        return open_local_preference(dir);
    }

    if !dir.is_dir() {
        return Err(ConfigError::NotFound(dir.to_path_buf()));
    }

    let store = XmlConfigStore::open_with_root(&path, LOCAL_PREFERENCE_ROOT);
    store.save()?;
    info!(path = %path.display(), "created local preference file");

    Ok(store)
}
