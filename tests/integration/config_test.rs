//! Configuration loading behavior.

use pkgwatch::{ErrorKind, PluginConfig};

use crate::helpers::TestDir;

#[test]
fn test_missing_file_loads_defaults() {
    let config = PluginConfig::load("/nonexistent/pkgwatch-config").expect("defaults expected");
    assert!(config.watch.script_list().is_empty());
    assert!(config.watch.watch_list().is_empty());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_toml_file_is_parsed() {
    let dir = TestDir::new();
    let config = dir
        .load_config(
            r#"
[watch]
scripts = ["/usr/local/libexec/notify.sh"]
packages = ["curl", "ftp/wget"]

[logging]
level = "debug"
"#,
        )
        .expect("valid config");

    let script_list = config.watch.script_list();
    let scripts: Vec<&str> = script_list.iter().collect();
    assert_eq!(scripts, vec!["/usr/local/libexec/notify.sh"]);
    assert_eq!(config.watch.watch_list().len(), 2);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_empty_strings_are_dropped_and_duplicates_removed() {
    let dir = TestDir::new();
    let config = dir
        .load_config(
            r#"
[watch]
scripts = ["", "/bin/a.sh", "/bin/b.sh", "/bin/a.sh", ""]
packages = ["curl", "", "curl"]
"#,
        )
        .expect("valid config");

    let script_list = config.watch.script_list();
    let scripts: Vec<&str> = script_list.iter().collect();
    assert_eq!(scripts, vec!["/bin/a.sh", "/bin/b.sh"]);

    let watch_list = config.watch.watch_list();
    let packages: Vec<&str> = watch_list.iter().collect();
    assert_eq!(packages, vec!["curl"]);
}

#[test]
fn test_structurally_invalid_config_is_a_configuration_error() {
    let dir = TestDir::new();
    let err = dir
        .load_config("[watch]\nscripts = 5\n")
        .expect_err("shape mismatch must fail");
    assert_eq!(err.kind, ErrorKind::Configuration);
}
