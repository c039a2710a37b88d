//! Integration tests for tagset
//!
//! These tests write tag documents and configuration files to temporary
//! directories and run the complete command workflows against them.

use std::fs;
use std::path::{Path, PathBuf};
use tagset::{
    TagSet, TagsetError,
    cli::ValueKind,
    commands::{self, diff::TagDiff, merge::merged_tags, show::visible_tags},
    config::TagsetConfig,
};
use tempfile::TempDir;

/// Helper function to write a file into the test directory
fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Helper function to create a config file with defaults and ignore rules
fn setup_config(dir: &Path) -> TagsetConfig {
    let path = write_file(
        dir,
        "config.toml",
        r#"
[default_tags]
owner = "platform"
env = "dev"

[ignore_tags]
keys = ["last_scanned"]
key_prefixes = ["kubernetes.io/"]
"#,
    );
    TagsetConfig::load_from(&path).unwrap()
}

#[test]
fn test_show_workflow() {
    let dir = TempDir::new().unwrap();
    let config = setup_config(dir.path());
    let file = write_file(
        dir.path(),
        "tags.json",
        r#"{"app": "web", "last_scanned": "today", "kubernetes.io/cluster/main": "owned", "aws:autoscaling:groupName": "asg"}"#,
    );

    let tags = commands::load_tags(&file).unwrap();
    assert_eq!(tags.len(), 4);

    let visible = visible_tags(&tags, &config, false);
    let mut keys = visible.keys();
    keys.sort_unstable();
    assert_eq!(keys, vec!["app", "aws:autoscaling:groupName"]);

    assert_eq!(visible_tags(&tags, &config, true).keys(), vec!["app"]);
    assert!(commands::show(&file, true, &config, true).is_ok());
}

#[test]
fn test_diff_workflow_across_formats() {
    let dir = TempDir::new().unwrap();
    let config = setup_config(dir.path());
    let old = write_file(
        dir.path(),
        "old.json",
        r#"{"app": "web", "tier": "frontend", "last_scanned": "monday"}"#,
    );
    let new = write_file(
        dir.path(),
        "new.toml",
        "app = \"api\"\nteam = \"core\"\nlast_scanned = \"tuesday\"\n",
    );

    let diff = TagDiff::compute(
        &commands::load_tags(&old).unwrap(),
        &commands::load_tags(&new).unwrap(),
        &config,
    );

    assert_eq!(diff.removed.keys(), vec!["tier"]);
    let mut updated = diff.updated.keys();
    updated.sort_unstable();
    assert_eq!(updated, vec!["app", "team"]);

    assert!(commands::diff(&old, &new, Some(1), &config, true).is_ok());
}

#[test]
fn test_merge_workflow() {
    let dir = TempDir::new().unwrap();
    let config = setup_config(dir.path());
    let file = write_file(dir.path(), "tags.toml", "env = \"prod\"\napp = \"web\"\n");
    let tags = commands::load_tags(&file).unwrap();

    let all = merged_tags(&tags, &config, false);
    assert_eq!(all.key_value("owner"), Some("platform"));
    assert_eq!(all.key_value("env"), Some("prod"));
    assert_eq!(all.len(), 3);

    let own = merged_tags(&all, &config, true);
    let mut keys = own.keys();
    keys.sort_unstable();
    assert_eq!(keys, vec!["app", "env"]);

    assert!(commands::merge(&file, false, &config, true).is_ok());
}

#[test]
fn test_merge_without_config_file() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "tags.json", r#"["a", "b"]"#);
    let config = TagsetConfig::default();

    let tags = commands::load_tags(&file).unwrap();
    assert_eq!(merged_tags(&tags, &config, false), tags);
}

#[test]
fn test_validate_workflow() {
    assert!(commands::validate("5", ValueKind::Int, Some("1"), Some("10"), "count", true).is_ok());
    assert!(commands::validate("", ValueKind::Float, Some("1"), None, "ratio", true).is_ok());

    let err = commands::validate("0", ValueKind::Int, Some("1"), None, "count", true).unwrap_err();
    match err {
        TagsetError::Validation(messages) => {
            assert_eq!(messages, vec!["expected count to be at least (1), got 0"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_invalid_document_reports_path() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "tags.json", "\"just a string\"");

    let err = commands::load_tags(&file).unwrap_err();
    assert!(err.to_string().contains("tags.json"));
}

#[test]
fn test_config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config = setup_config(dir.path());
    let path = dir.path().join("copy").join("config.toml");

    config.save_to(&path).unwrap();
    let reloaded = TagsetConfig::load_from(&path).unwrap();

    assert_eq!(reloaded, config);
    let defaults = reloaded.default_config();
    assert!(defaults.tags_equal(Some(&TagSet::from_values([("owner", "platform"), ("env", "dev")]))));
}
