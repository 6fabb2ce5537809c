use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

// assert_cmd captures stdout through a pipe, so the login screen must
// refuse to start instead of writing alternate-screen escapes into it.
#[test]
fn test_login_refuses_piped_stdout() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("anteroom")
        .env("ANTEROOM_HOME", dir.path())
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
