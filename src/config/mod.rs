//! Preference persistence: configuration stores and XML sidecar files.
//!
//! This module provides the key-value configuration store the preference
//! screens bind to, plus the plumbing shared with the history file. Key
//! features:
//!
//! - **Typed accessors**: bool / int / float / string, each with a default
//! - **Write-through**: every setter persists immediately, no save step
//! - **Atomic writes**: temp-file-then-rename so a crash mid-save keeps
//!   the previous file
//! - **Local preferences**: optional per-game preference files
//!
//! # Example
//!
//! ```no_run
//! use vn_launcher::config::{preference_dir, ConfigStore, XmlConfigStore, GLOBAL_PREFERENCE_FILE};
//!
//! let dir = preference_dir(None)?;
//! let store = XmlConfigStore::open(dir.join(GLOBAL_PREFERENCE_FILE));
//!
//! let renderer = store.get_string("renderer", "software");
//! println!("Renderer: {}", renderer);
//! # Ok::<(), vn_launcher::config::ConfigError>(())
//! ```

use std::fs;
use std::path::PathBuf;

mod error;
pub mod local;
pub mod store;
pub mod xml;

pub use error::ConfigError;
pub use local::{
    create_local_preference_at, has_local_preference, local_preference_path, open_local_preference,
    LOCAL_PREFERENCE_FILE,
};
pub use store::{ConfigStore, MemoryConfigStore, XmlConfigStore, GLOBAL_PREFERENCE_FILE};

/// Directory name used under the platform configuration directory.
pub const APP_DIR_NAME: &str = "vn-launcher";

/// Resolves (and creates) the app-private preference directory.
///
/// Uses `override_dir` when given, otherwise `<config_dir>/vn-launcher`.
///
/// # Errors
///
/// Returns `ConfigError::NoPreferenceDir` when the platform has no
/// configuration directory and no override was given, or
/// `ConfigError::Io` when the directory cannot be created.
pub fn preference_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let dir = match override_dir {
        Some(dir) => dir,
        None => dirs::config_dir()
            .ok_or(ConfigError::NoPreferenceDir)?
            .join(APP_DIR_NAME),
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
mod tests;
