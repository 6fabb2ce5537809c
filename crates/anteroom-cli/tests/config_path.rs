use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("anteroom")
        .env("ANTEROOM_HOME", dir.path())
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

    cargo_bin_cmd!("anteroom")
        .env("ANTEROOM_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("base_url"));
    assert!(contents.contains("[methods]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("anteroom")
        .env("ANTEROOM_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_show_reflects_overrides() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[provider]\nbase_url = \"http://localhost:9900\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("anteroom")
        .env("ANTEROOM_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9900"));
}

#[test]
fn test_provider_url_flag_overrides_config() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("anteroom")
        .env("ANTEROOM_HOME", dir.path())
        .args(["--provider-url", "http://localhost:9901", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9901"));
}
