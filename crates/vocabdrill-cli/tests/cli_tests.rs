//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vocabdrill(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vocabdrill").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("VOCABDRILL_API_URL");
    cmd
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    vocabdrill(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created vocabdrill.toml"));

    let written = std::fs::read_to_string(dir.path().join("vocabdrill.toml")).unwrap();
    assert!(written.contains("api_base_url"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    vocabdrill(&dir).arg("init").assert().success();

    vocabdrill(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn word_with_missing_config_file() {
    let dir = TempDir::new().unwrap();

    vocabdrill(&dir)
        .arg("word")
        .arg("--config")
        .arg("no_such_config.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn word_with_unreachable_api() {
    let dir = TempDir::new().unwrap();

    vocabdrill(&dir)
        .arg("word")
        .arg("--api-url")
        .arg("http://127.0.0.1:9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load word"));
}

#[test]
fn word_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();

    vocabdrill(&dir)
        .arg("word")
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    vocabdrill(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vocabulary practice"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    vocabdrill(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vocabdrill"));
}
