//! Config file integration: TOML values drive a full packaging run

use sompack::cli;
use sompack::config::PackConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toml_config_drives_run() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("st-lib");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("Kernel.st"), "kernel").unwrap();

    let config_path = temp_dir.path().join("sompack.toml");
    fs::write(
        &config_path,
        format!(
            "roots = [{:?}]\nsuffix = \".st\"\ntemplate = \"global\"\nroot_mode = \"strip\"\n",
            root.to_string_lossy()
        ),
    )
    .unwrap();

    let config = PackConfig::load_from_file(&config_path).unwrap();
    let line = cli::run(&config).unwrap();

    assert_eq!(
        line,
        r#"'use strict'; window.loadCoreLib = function () { return {"Kernel.st":"kernel"}; };"#
    );
}

#[test]
fn test_default_config_round_trips_through_toml() {
    let config = PackConfig::default();
    let serialized = toml::to_string(&config).unwrap();
    let reloaded: PackConfig = toml::from_str(&serialized).unwrap();

    assert_eq!(reloaded.roots, config.roots);
    assert_eq!(reloaded.suffix, config.suffix);
    assert_eq!(reloaded.template, config.template);
    assert_eq!(reloaded.root_mode, config.root_mode);
}
