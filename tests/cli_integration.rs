mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn courseplan(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("courseplan").unwrap();
    cmd.env("COURSEPLAN_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_empty_list() {
    let home = TempDir::new().unwrap();
    courseplan(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses registered"));
}

#[test]
fn test_import_then_list() {
    let home = TempDir::new().unwrap();
    let file = common::sample_workbook(home.path());

    courseplan(home.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 course(s) from courses.xlsx"))
        .stdout(predicate::str::contains("Skipped 2 row(s)"));

    courseplan(home.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("수학"))
        .stdout(predicate::str::contains("과학"))
        .stdout(predicate::str::contains("영어").not())
        .stdout(predicate::str::contains("13 hour(s) in total"));
}

#[test]
fn test_set_and_clear_prerequisite() {
    let home = TempDir::new().unwrap();
    let file = common::sample_workbook(home.path());
    courseplan(home.path()).arg("import").arg(&file).assert().success();

    courseplan(home.path())
        .args(["prereq", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("과학 now requires 수학"));

    courseplan(home.path())
        .args(["prereq", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("과학 no longer has a prerequisite"));
}

#[test]
fn test_self_prerequisite_fails() {
    let home = TempDir::new().unwrap();
    let file = common::sample_workbook(home.path());
    courseplan(home.path()).arg("import").arg(&file).assert().success();

    courseplan(home.path())
        .args(["prereq", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be its own prerequisite"));
}

#[test]
fn test_unsupported_file_keeps_existing_courses() {
    let home = TempDir::new().unwrap();
    let file = common::sample_workbook(home.path());
    courseplan(home.path()).arg("import").arg(&file).assert().success();

    let csv = home.path().join("courses.csv");
    std::fs::write(&csv, "name,hours\nMath,10\n").unwrap();

    courseplan(home.path())
        .arg("import")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));

    courseplan(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("수학"));
}

#[test]
fn test_clear_requires_confirmation() {
    let home = TempDir::new().unwrap();
    let file = common::sample_workbook(home.path());
    courseplan(home.path()).arg("import").arg(&file).assert().success();

    courseplan(home.path())
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    courseplan(home.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 course(s)."));

    assert!(!home.path().join("navy_timetable_courses.json").exists());

    courseplan(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses registered"));
}

#[test]
fn test_config_changes_storage_key() {
    let home = TempDir::new().unwrap();

    courseplan(home.path())
        .args(["config", "storage-key", "spring_term"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key set to spring_term"));

    let file = common::sample_workbook(home.path());
    courseplan(home.path()).arg("import").arg(&file).assert().success();
    assert!(home.path().join("spring_term.json").exists());
}

#[test]
fn test_corrupt_store_warns_and_continues() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("navy_timetable_courses.json"), "{ not json").unwrap();

    courseplan(home.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("stored data was discarded"))
        .stdout(predicate::str::contains("No courses registered"));
}

#[test]
fn test_doctor_writes_back_repaired_links() {
    let home = TempDir::new().unwrap();
    let slot = home.path().join("navy_timetable_courses.json");
    std::fs::write(
        &slot,
        r#"{"version":1,"courses":[{"id":"a","name":"Math","hours":2,"prerequisiteId":"gone"}]}"#,
    )
    .unwrap();

    courseplan(home.path())
        .arg("doctor")
        .assert()
        .success()
        .stderr(predicate::str::contains("stored data was repaired"))
        .stdout(predicate::str::contains("repairs made while loading"));

    let raw = std::fs::read_to_string(&slot).unwrap();
    assert!(!raw.contains("gone"));

    courseplan(home.path())
        .arg("doctor")
        .assert()
        .success()
        .stderr(predicate::str::contains("stored data was repaired").not())
        .stdout(predicate::str::contains("No inconsistencies found."));
}
