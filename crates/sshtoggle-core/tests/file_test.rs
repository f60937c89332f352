//! File round-trip tests against a temporary directory.

use sshtoggle_core::{ConfigError, ReaderConfig, Record, read_config, save, write_config};
use tempfile::TempDir;

const AGENT_TOML: &str = "\
# Managed by 1Password
[[ssh-keys]]
vault = \"Personal\"

#[[ssh-keys]]
#item = \"GitHub\"
#vault = \"Work\"
";

#[test]
fn read_toggle_save_reload() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("agent.toml");
    write_config(&path, AGENT_TOML).expect("seed file");

    let mut scan = read_config(&path, &ReaderConfig::default()).expect("read config");
    assert_eq!(scan.store.records(), &[Record::vault("Personal"), Record::item("GitHub", "Work")]);

    scan.store.toggle(0).expect("toggle first");
    scan.store.toggle(1).expect("toggle second");
    save(&path, &scan.store).expect("save config");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(!written.contains("Managed by 1Password"), "unrelated content is regenerated away");

    let reloaded = read_config(&path, &ReaderConfig::default()).expect("reload config");
    assert_eq!(reloaded.store.records(), scan.store.records());
    assert_eq!(reloaded.store.selected().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("absent.toml");

    let err = read_config(&path, &ReaderConfig::default()).expect_err("file does not exist");
    assert!(err.is_read());
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn unwritable_path_is_a_write_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("missing-dir").join("agent.toml");

    let err = write_config(&path, "").expect_err("parent directory does not exist");
    assert!(matches!(err, ConfigError::Write { .. }));
}
