#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Env {
    _temp: TempDir,
    data_file: PathBuf,
    config_home: PathBuf,
}

impl Env {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("data.json");
        let config_home = temp.path().join("config");
        Self {
            _temp: temp,
            data_file,
            config_home,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("tracker"));
        cmd.env("TRACKER_DATA_FILE", self.data_file.as_os_str())
            .env("XDG_CONFIG_HOME", self.config_home.as_os_str())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_add_then_list() {
    let env = Env::new();

    env.cmd()
        .args(["add", "went", "for", "a", "run", "--tags", "health, outside"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (1): went for a run [health, outside]"));

    env.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("went for a run"))
        .stdout(predicate::str::contains("health, outside"));

    // bare invocation lists too
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("went for a run"));
}

#[test]
fn test_data_file_created_on_first_use() {
    let env = Env::new();
    assert!(!env.data_file.exists());

    env.cmd()
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env.data_file.to_string_lossy().to_string()));

    assert!(env.data_file.exists());
}

#[test]
fn test_bad_date_fails_without_writing() {
    let env = Env::new();

    env.cmd()
        .args(["add", "something", "--date", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse date: someday"));

    let content = fs::read_to_string(&env.data_file).unwrap_or_default();
    assert!(!content.contains("something"));
}

#[test]
fn test_impossible_date_is_rejected() {
    let env = Env::new();

    env.cmd()
        .args(["add", "leap", "--date", "2/30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse date"));
}

#[test]
fn test_backdated_record_outside_default_window() {
    let env = Env::new();

    env.cmd()
        .args(["add", "ancient", "--date", "2001-01-01"])
        .assert()
        .success();

    env.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ancient").not())
        .stdout(predicate::str::contains("No records found."));

    env.cmd()
        .args(["list", "--from", "2000-12-31", "--to", "2001-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ancient"))
        .stdout(predicate::str::contains("2001-01-01 00:00"));

    // `--to` alone lists the window that ends there
    env.cmd()
        .args(["list", "--to", "2001-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ancient"));
}

#[test]
fn test_reversed_range_is_rejected() {
    let env = Env::new();

    env.cmd()
        .args(["list", "--from", "today", "--to", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let env = Env::new();

    env.cmd().args(["add", "A"]).assert().success();
    env.cmd().args(["add", "B"]).assert().success();

    env.cmd()
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record deleted (1): A"));

    env.cmd()
        .args(["add", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (3): C"));

    env.cmd()
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found: 1"));
}

#[test]
fn test_newest_id_is_not_reused_after_delete() {
    let env = Env::new();

    env.cmd().args(["add", "A"]).assert().success();
    env.cmd().args(["add", "B"]).assert().success();
    env.cmd().args(["delete", "2", "--yes"]).assert().success();

    env.cmd()
        .args(["add", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (3): C"));

    env.cmd()
        .args(["show", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found: 2"));
}

#[test]
fn test_delete_declined_keeps_record() {
    let env = Env::new();
    env.cmd().args(["add", "keep", "me"]).assert().success();

    env.cmd()
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Aborted"));

    env.cmd()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep me"));
}

#[test]
fn test_delete_confirmed() {
    let env = Env::new();
    env.cmd().args(["add", "drop", "me"]).assert().success();

    env.cmd()
        .args(["rm", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record deleted (1): drop me"));
}

#[test]
fn test_delete_missing_record() {
    let env = Env::new();

    env.cmd()
        .args(["delete", "7", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found: 7"));
}

#[test]
fn test_edit_title_keeps_tags() {
    let env = Env::new();
    env.cmd()
        .args(["add", "A", "--tags", "x"])
        .assert()
        .success();

    env.cmd()
        .args(["edit", "1", "--title", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record updated (1): B"));

    env.cmd()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B"))
        .stdout(predicate::str::contains("tags: x"));
}

#[test]
fn test_edit_interactive() {
    let env = Env::new();
    env.cmd()
        .args(["add", "A", "--tags", "x"])
        .assert()
        .success();

    // keep the title, clear the tags
    env.cmd()
        .args(["edit", "1"])
        .write_stdin("\n-\n")
        .assert()
        .success();

    env.cmd()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tags: no tags"));
}

#[test]
fn test_continue_copies_record() {
    let env = Env::new();
    env.cmd()
        .args(["add", "reading", "--tags", "books"])
        .assert()
        .success();

    env.cmd()
        .args(["continue", "1", "--date", "yesterday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Continued (1 -> 2): reading"));

    env.cmd()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tags: books"))
        .stdout(predicate::str::contains("00:00"));
}

#[test]
fn test_empty_title_is_prompted() {
    let env = Env::new();

    env.cmd()
        .args(["add", "--tags", "t"])
        .write_stdin("\n  \nfrom the prompt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (1): from the prompt [t]"));
}

#[test]
fn test_empty_title_with_closed_input_aborts() {
    let env = Env::new();

    env.cmd()
        .args(["add"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Aborted"));

    let content = fs::read_to_string(&env.data_file).unwrap_or_default();
    assert!(content.trim().is_empty());
}
