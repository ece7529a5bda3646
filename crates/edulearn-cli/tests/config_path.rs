use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("splash_delay_ms ="));
    assert!(contents.contains("[mock_auth]"));
    assert!(contents.contains("# catalog_file ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_reports_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "splash_delay_ms = \"soon\"").unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["catalog", "courses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_app_requires_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
