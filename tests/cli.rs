use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn demotimer() -> Command {
    let mut cmd = Command::cargo_bin("demotimer").unwrap();
    cmd.env_remove("DEMOTIMER_FILE").env_remove("DEMOTIMER_UI");
    cmd
}

#[test]
fn test_check_prints_plan_and_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("segments.txt");
    fs::write(&path, "Intro,1:30\n# comment\nQ&A,30s\nBroken\n").unwrap();

    demotimer()
        .arg("check")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Intro"))
        .stdout(predicate::str::contains("01:30"))
        .stdout(predicate::str::contains("Q&A"))
        .stdout(predicate::str::contains("Total planned time: 02:00"))
        .stdout(predicate::str::contains("warning: line 4: missing duration"));
}

#[test]
fn test_check_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    demotimer()
        .args(["check", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("Introduction"))
        .stdout(predicate::str::contains("Total planned time: 06:00"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan").join("segments.txt");

    demotimer()
        .args(["init", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default segments"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("name,duration\n"));
    assert!(written.contains("Introduction,01:00"));

    demotimer()
        .args(["init", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    demotimer()
        .args(["init", "--force", "--file"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_env_var_selects_plan_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env.txt");
    fs::write(&path, "Only,45\n").unwrap();

    demotimer()
        .env("DEMOTIMER_FILE", &path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Only"))
        .stdout(predicate::str::contains("Total planned time: 00:45"));
}
