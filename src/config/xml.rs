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

//! XML sidecar persistence
//!
//! Both the history list and the preference stores are small XML
//! documents: one root element wrapping attribute-only child elements.
//! Reads go through serde + quick-xml; writes go through
//! `atomic-write-file` so an interrupted save leaves the previous file in
//! place.

use atomic_write_file::AtomicWriteFile;
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, io::Write, path::Path};

use crate::config::ConfigError;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Reads and deserialises the document at `path`.
///
/// # Errors
///
/// * `ConfigError::NotFound` - No file at `path`
/// * `ConfigError::Io` - File exists but cannot be read
/// * `ConfigError::Parse` - File is not a valid document
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;

    quick_xml::de::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialises `document` under `root` with an XML declaration.
pub fn render_document<T: Serialize>(root: &str, document: &T) -> Result<String, ConfigError> {
    let body = quick_xml::se::to_string_with_root(root, document)?;
    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}

/// Serialises `document` and replaces `path` atomically.
pub fn write_document<T: Serialize>(path: &Path, root: &str, document: &T) -> Result<(), ConfigError> {
    let content = render_document(root, document)?;

    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}
