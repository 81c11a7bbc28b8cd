#![allow(dead_code)]

use assert_cmd::Command;
use promptags::domain::Tag;
use std::fs;
use std::path::Path;

pub fn promptags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("promptags").unwrap();
    cmd.env_remove("PROMPTAGS_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a store and add the given tags in order
pub fn store_with_tags(root: &Path, tags: &[&str]) {
    promptags_cmd().arg("init").arg(root).assert().success();

    if !tags.is_empty() {
        promptags_cmd()
            .current_dir(root)
            .arg("add")
            .args(tags)
            .assert()
            .success();
    }
}

/// Texts of the stored tag list, in order
pub fn listed_tags(root: &Path) -> Vec<String> {
    let contents = fs::read_to_string(root.join(".promptags/tags.json")).unwrap();
    let tags: Vec<Tag> = serde_json::from_str(&contents).unwrap();
    tags.into_iter().map(|tag| tag.text).collect()
}
