#![cfg(unix)]

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn configured_home() -> TempDir {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".gclone");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{"default_username":"alice","tmp_directory":"/tmp/gclone"}"#,
    )
    .unwrap();
    home
}

#[test]
fn test_usage_with_no_color_is_plain() {
    let home = configured_home();

    cargo::cargo_bin_cmd!("gclone")
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env("CLICOLOR_FORCE", "1")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Usage: gclone [-c] [-tmp] repository-name",
        ))
        .stdout(predicate::str::contains("`").not())
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_usage_with_clicolor_force_is_styled() {
    let home = configured_home();

    cargo::cargo_bin_cmd!("gclone")
        .env("HOME", home.path())
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("repository-name"))
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_error_with_no_color_is_plain() {
    let home = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("gclone")
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("myrepo")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: gclone is not configured"));
}
