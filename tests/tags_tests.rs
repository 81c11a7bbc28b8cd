//! Integration tests for editing the tag list

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{listed_tags, promptags_cmd, store_with_tags};

#[test]
fn test_list_empty_store() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &[]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags"));
}

#[test]
fn test_add_and_list_with_categories() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &["cat", "8k", "shiny skin"]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. cat\n"))
        .stdout(predicate::str::contains("2. 8k  [picture-quality #e67e22]"))
        .stdout(predicate::str::contains(
            "3. shiny skin  [character-quality #9b59b6]",
        ));
}

#[test]
fn test_add_splits_comma_separated_argument() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &[]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("add")
        .arg("cat, dog")
        .arg("8k")
        .arg(" , ")
        .assert()
        .success()
        .stdout("Added: cat\nAdded: dog\nAdded: 8k\n");

    assert_eq!(listed_tags(temp.path()), vec!["cat", "dog", "8k"]);
}

#[test]
fn test_tag_text_with_list_separators() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &["st. bernard", "a  [b]"]);

    assert_eq!(listed_tags(temp.path()), vec!["st. bernard", "a  [b]"]);
}

#[test]
fn test_add_skips_duplicates() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &["cat"]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("add")
        .arg("cat")
        .arg("dog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: dog"))
        .stdout(predicate::str::contains("Already in list: cat"));

    assert_eq!(listed_tags(temp.path()), vec!["cat", "dog"]);
}

#[test]
fn test_remove_by_position() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &["a", "b", "c"]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("remove")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: b"));

    assert_eq!(listed_tags(temp.path()), vec!["a", "c"]);
}

#[test]
fn test_remove_out_of_range() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &["a"]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("remove")
        .arg("5")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No tag at position 5"));
}

#[test]
fn test_move_tag() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &["a", "b", "c"]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("move")
        .arg("3")
        .arg("1")
        .assert()
        .success();

    assert_eq!(listed_tags(temp.path()), vec!["c", "a", "b"]);
}

#[test]
fn test_clear_keeps_history() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &["a", "b"]);

    promptags_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success();

    promptags_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 tags"));

    assert!(listed_tags(temp.path()).is_empty());
    let history = fs::read_to_string(temp.path().join(".promptags/history.json")).unwrap();
    assert!(history.contains("\"a\""));
}

#[test]
fn test_malformed_tag_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &[]);
    fs::write(temp.path().join(".promptags/tags.json"), "not json at all").unwrap();

    promptags_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags"));

    promptags_cmd()
        .current_dir(temp.path())
        .arg("add")
        .arg("fresh")
        .assert()
        .success();

    assert_eq!(listed_tags(temp.path()), vec!["fresh"]);
}

#[test]
fn test_missing_tag_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    store_with_tags(temp.path(), &[]);
    fs::remove_file(temp.path().join(".promptags/tags.json")).unwrap();

    promptags_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags"));
}
