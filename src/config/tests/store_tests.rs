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

//! Configuration store tests
//!
//! Tests for the typed accessors and the XML-backed store:
//! - Defaults for missing keys
//! - Boolean parsing (integers and words)
//! - Write-through persistence and reload
//! - Corrupt and missing files degrade to an empty store

use std::fs;
use tempfile::TempDir;

use crate::config::{preference_dir, ConfigError, ConfigStore, MemoryConfigStore, XmlConfigStore};

#[test]
fn test_defaults_for_missing_keys() {
    let store = MemoryConfigStore::new();

    assert!(store.get_bool("outputlog", true));
    assert_eq!(store.get_int("count", 7), 7);
    assert_eq!(store.get_float("vcursor_scale", 0.5), 0.5);
    assert_eq!(store.get_string("renderer", "software"), "software");
}

#[test]
fn test_bool_parsing() {
    let store = MemoryConfigStore::with_values([
        ("a", "1"),
        ("b", "0"),
        ("c", "true"),
        ("d", "false"),
        ("e", "garbage"),
        ("f", "2"),
    ]);

    assert!(store.get_bool("a", false));
    assert!(!store.get_bool("b", true));
    assert!(store.get_bool("c", false));
    assert!(!store.get_bool("d", true));
    assert!(store.get_bool("e", true), "Unparseable value falls back to default");
    assert!(store.get_bool("f", false));
}

#[test]
fn test_bool_is_stored_as_integer() {
    let store = MemoryConfigStore::new();
    store.set_bool("showfps", true);

    assert_eq!(store.raw("showfps").as_deref(), Some("1"));
    assert_eq!(store.get_int("showfps", 0), 1);
    assert!(store.get_bool("showfps", false));
}

#[test]
fn test_unparseable_numbers_use_default() {
    let store = MemoryConfigStore::with_values([("n", "abc"), ("f", "x.y")]);

    assert_eq!(store.get_int("n", 3), 3);
    assert_eq!(store.get_float("f", 1.5), 1.5);
}

#[test]
fn test_xml_store_persists_on_set() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("GlobalPreference.xml");

    let store = XmlConfigStore::open(&path);
    assert!(!path.exists(), "Opening must not create the file");

    store.set_string("renderer", "opengl");
    store.set_float("menu_handler_opa", 0.25);
    store.set_bool("keep_screen_alive", false);
    assert!(path.exists(), "Setter should persist immediately");

    let reloaded = XmlConfigStore::open(&path);
    assert_eq!(reloaded.get_string("renderer", "software"), "opengl");
    assert_eq!(reloaded.get_float("menu_handler_opa", 0.15), 0.25);
    assert!(!reloaded.get_bool("keep_screen_alive", true));
}

#[test]
fn test_xml_store_file_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("GlobalPreference.xml");

    let store = XmlConfigStore::open(&path);
    store.set_string("renderer", "opengl");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<?xml"));
    assert!(content.contains("<GlobalPreference>"));
    assert!(content.contains(r#"<Item key="renderer" value="opengl"/>"#));
}

#[test]
fn test_xml_store_reads_hand_written_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("GlobalPreference.xml");
    fs::write(
        &path,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<GlobalPreference>
    <Item key="showfps" value="1"/>
    <Item key="memusage" value="low"/>
</GlobalPreference>
"#,
    )
    .unwrap();

    let store = XmlConfigStore::open(&path);
    assert!(store.get_bool("showfps", false));
    assert_eq!(store.get_string("memusage", "unlimited"), "low");
}

#[test]
fn test_corrupt_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("GlobalPreference.xml");
    fs::write(&path, "<GlobalPreference><Item key=").unwrap();

    let strict = XmlConfigStore::load_with_root(&path, "GlobalPreference");
    assert!(matches!(strict, Err(ConfigError::Parse { .. })));

    let store = XmlConfigStore::open(&path);
    assert_eq!(store.get_string("renderer", "software"), "software");
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.xml");

    match XmlConfigStore::load_with_root(&path, "GlobalPreference") {
        Err(ConfigError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_preference_dir_override_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let wanted = temp_dir.path().join("nested").join("prefs");

    let dir = preference_dir(Some(wanted.clone())).unwrap();
    assert_eq!(dir, wanted);
    assert!(wanted.is_dir());
}

#[test]
fn test_write_failure_keeps_value_in_memory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing_dir").join("GlobalPreference.xml");

    let store = XmlConfigStore::open(&path);
    store.set_bool("outputlog", true);

    assert!(store.get_bool("outputlog", false), "Value should survive a failed write");
    assert!(store.save().is_err());
    assert!(!path.exists());
}
