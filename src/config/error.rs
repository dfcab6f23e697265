use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing preference files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Preference file does not exist.
    #[error("Preference file not found: {0}")]
    NotFound(PathBuf),
    /// File exists but is not a valid preference document.
    #[error("Malformed XML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },
    /// In-memory document could not be turned into XML.
    #[error("Failed to serialise XML: {0}")]
    Serialize(#[from] quick_xml::SeError),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// No platform configuration directory and no override given.
    #[error("No preference directory available on this platform")]
    NoPreferenceDir,
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
