//! End-to-end packaging tests: scan → build → render

use sompack::cli;
use sompack::config::PackConfig;
use sompack::error::PackError;
use sompack::tree::builder::RootMode;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_for(root: &Path) -> PackConfig {
    let mut config = PackConfig::default();
    config.roots = vec![root.to_path_buf()];
    config
}

/// Extract the JSON payload from a rendered loader line.
fn json_payload(line: &str) -> &str {
    let start = line.find("return ").expect("loader line has a return") + "return ".len();
    let end = line.rfind("; };").expect("loader line has a closing");
    &line[start..end]
}

#[test]
fn test_single_file_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.som"), "hello").unwrap();

    let mut config = config_for(&root);
    config.root_mode = RootMode::Strip;

    let line = cli::run(&config).unwrap();
    assert_eq!(json_payload(&line), r#"{"a.som":"hello"}"#);
}

#[test]
fn test_nested_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir_all(root.join("dir")).unwrap();
    fs::write(root.join("dir").join("b.som"), "x").unwrap();

    let mut config = config_for(&root);
    config.root_mode = RootMode::Strip;

    let line = cli::run(&config).unwrap();
    assert_eq!(json_payload(&line), r#"{"dir":{"b.som":"x"}}"#);
}

#[test]
fn test_non_matching_suffix_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.som"), "in").unwrap();
    fs::write(root.join("a.other"), "out").unwrap();

    let mut config = config_for(&root);
    config.root_mode = RootMode::Strip;

    let line = cli::run(&config).unwrap();
    assert_eq!(json_payload(&line), r#"{"a.som":"in"}"#);
}

#[test]
fn test_missing_root_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let result = cli::run(&config_for(&missing));
    assert!(matches!(result, Err(PackError::Filesystem { .. })));
}

#[test]
fn test_empty_root_emits_empty_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir(&root).unwrap();

    let mut config = config_for(&root);
    config.root_mode = RootMode::Strip;

    let line = cli::run(&config).unwrap();
    assert_eq!(json_payload(&line), "{}");
}

/// Regression: keep mode keys the tree by the root's basename, which is
/// what the downstream consumer indexes by.
#[test]
fn test_keep_mode_contract() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.som"), "hello").unwrap();

    let line = cli::run(&config_for(&root)).unwrap();
    assert_eq!(json_payload(&line), r#"{"core-lib":{"a.som":"hello"}}"#);
}

/// Regression: strip mode emits no root-name segment.
#[test]
fn test_strip_mode_contract() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.som"), "hello").unwrap();

    let mut config = config_for(&root);
    config.root_mode = RootMode::Strip;

    let line = cli::run(&config).unwrap();
    assert!(!line.contains("core-lib"));
    assert_eq!(json_payload(&line), r#"{"a.som":"hello"}"#);
}

#[test]
fn test_idempotent_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir_all(root.join("Smalltalk")).unwrap();
    fs::write(root.join("Kernel.som"), "kernel").unwrap();
    fs::write(root.join("Smalltalk").join("Array.som"), "array").unwrap();

    let config = config_for(&root);
    let first = cli::run(&config).unwrap();
    let second = cli::run(&config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_leaf_count_matches_matching_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::write(root.join("one.som"), "1").unwrap();
    fs::write(root.join("a").join("two.som"), "2").unwrap();
    fs::write(root.join("a/b").join("three.som"), "3").unwrap();
    fs::write(root.join("a/b").join("skip.txt"), "no").unwrap();

    let line = cli::run(&config_for(&root)).unwrap();
    let value: serde_json::Value = serde_json::from_str(json_payload(&line)).unwrap();

    fn count_leaves(value: &serde_json::Value) -> usize {
        match value {
            serde_json::Value::Object(map) => map.values().map(count_leaves).sum(),
            serde_json::Value::String(_) => 1,
            _ => 0,
        }
    }

    assert_eq!(count_leaves(&value), 3);
}

#[test]
fn test_custom_suffix() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("core-lib");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.st"), "smalltalk").unwrap();
    fs::write(root.join("b.som"), "som").unwrap();

    let mut config = config_for(&root);
    config.suffix = ".st".to_string();
    config.root_mode = RootMode::Strip;

    let line = cli::run(&config).unwrap();
    assert_eq!(json_payload(&line), r#"{"a.st":"smalltalk"}"#);
}
