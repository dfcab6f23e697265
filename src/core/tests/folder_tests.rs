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

//! Game folder detection tests
//!
//! Tests for deciding whether a folder can be launched:
//! - Archive extension matching (case-insensitive)
//! - Archives at the top level and nested deep below
//! - Launch script detection
//! - Empty trees and hidden entries

use std::fs;
use tempfile::TempDir;

use crate::core::{
    folder::{contains_archive, has_archive_extension, has_launch_script, is_archive_file, is_game_folder},
    StdFileSystem,
};

#[test]
fn test_archive_extension_case_insensitive() {
    assert!(has_archive_extension("data.xp3"));
    assert!(has_archive_extension("DATA.XP3"));
    assert!(has_archive_extension("patch.Xp3"));
    assert!(!has_archive_extension("data.zip"));
    assert!(!has_archive_extension("xp3"));
    assert!(!has_archive_extension("data.xp3.bak"));
}

#[test]
fn test_archive_directly_inside() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("data.xp3"), b"XP3").unwrap();

    assert!(is_game_folder(&StdFileSystem, temp_dir.path()));
}

#[test]
fn test_archive_three_levels_deep() {
    let temp_dir = TempDir::new().unwrap();
    let deep = temp_dir.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir_all(temp_dir.path().join("other")).unwrap();
    fs::write(deep.join("Patch.XP3"), b"XP3").unwrap();

    assert!(
        is_game_folder(&StdFileSystem, temp_dir.path()),
        "Archive three levels below should make the root launchable"
    );
}

#[test]
fn test_empty_tree_is_not_game_folder() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("x").join("y")).unwrap();

    assert!(!is_game_folder(&StdFileSystem, temp_dir.path()));
}

#[test]
fn test_unrelated_files_only() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("readme.txt"), b"hello").unwrap();
    fs::create_dir_all(temp_dir.path().join("save")).unwrap();
    fs::write(temp_dir.path().join("save").join("data.sav"), b"0").unwrap();

    assert!(!is_game_folder(&StdFileSystem, temp_dir.path()));
}

#[test]
fn test_launch_script_marks_folder() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("startup.tjs"), b"// start").unwrap();

    assert!(has_launch_script(&StdFileSystem, temp_dir.path()));
    assert!(is_game_folder(&StdFileSystem, temp_dir.path()));
}

#[test]
fn test_launch_script_name_is_exact() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Startup.TJS"), b"// start").unwrap();

    assert!(!has_launch_script(&StdFileSystem, temp_dir.path()));
}

#[test]
fn test_launch_script_in_subfolder_does_not_count() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("game");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("startup.tjs"), b"// start").unwrap();

    assert!(!is_game_folder(&StdFileSystem, temp_dir.path()));
    assert!(is_game_folder(&StdFileSystem, &sub));
}

#[test]
fn test_hidden_entries_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let hidden = temp_dir.path().join(".cache");
    fs::create_dir_all(&hidden).unwrap();
    fs::write(hidden.join("data.xp3"), b"XP3").unwrap();
    fs::write(temp_dir.path().join(".old.xp3"), b"XP3").unwrap();

    assert!(!contains_archive(&StdFileSystem, temp_dir.path()));
}

#[test]
fn test_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    assert!(!is_game_folder(&StdFileSystem, &missing));
    assert!(!contains_archive(&StdFileSystem, &missing));
}

#[test]
fn test_is_archive_file() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("data.xp3");
    fs::write(&archive, b"XP3").unwrap();
    let dir_named_like_archive = temp_dir.path().join("folder.xp3");
    fs::create_dir_all(&dir_named_like_archive).unwrap();

    assert!(is_archive_file(&StdFileSystem, &archive));
    assert!(!is_archive_file(&StdFileSystem, &dir_named_like_archive));
    assert!(!is_archive_file(&StdFileSystem, &temp_dir.path().join("none.xp3")));
}

#[cfg(unix)]
#[test]
fn test_links_back_up_the_tree_terminate() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a");
    fs::create_dir_all(&a).unwrap();
    symlink("..", a.join("l1")).unwrap();
    symlink("..", a.join("l2")).unwrap();

    assert!(
        !is_game_folder(&StdFileSystem, temp_dir.path()),
        "Upward links without an archive should not make the folder launchable"
    );
}

#[cfg(unix)]
#[test]
fn test_linked_archive_counts() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store");
    let game = temp_dir.path().join("game");
    fs::create_dir_all(&store).unwrap();
    fs::create_dir_all(&game).unwrap();
    fs::write(store.join("data.xp3"), b"XP3").unwrap();
    symlink(store.join("data.xp3"), game.join("data.xp3")).unwrap();

    assert!(is_game_folder(&StdFileSystem, &game));
}
