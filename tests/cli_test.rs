//! End-to-end tests for the weeknote binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn weeknote(notes_dir: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weeknote"))
        .arg("--notesdir")
        .arg(notes_dir)
        .args(["--date", "2024-03-10"])
        .args(extra)
        .output()
        .expect("failed to run weeknote")
}

#[test]
fn test_run_rotates_and_creates() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("weekly")).unwrap();
    fs::write(temp_dir.path().join("24.03.03.md"), "").unwrap();

    let output = weeknote(temp_dir.path(), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("24.03.03.md"));
    assert!(stdout.contains("24.03.10.md"));
    assert!(temp_dir.path().join("weekly/24.03.03.md").exists());
    assert!(temp_dir.path().join("24.03.10.md").exists());
}

#[test]
fn test_nothing_to_do_is_silent_success() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("weekly")).unwrap();
    fs::write(temp_dir.path().join("24.03.10.md"), "mine").unwrap();

    let output = weeknote(temp_dir.path(), &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("24.03.10.md")).unwrap(),
        "mine"
    );
}

#[test]
fn test_missing_notes_dir_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = weeknote(&missing, &[]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("missing"));
}

#[test]
fn test_fatal_error_prints_os_error_once() {
    let temp_dir = TempDir::new().unwrap();
    // No weekly/ directory, so the move fails
    fs::write(temp_dir.path().join("24.03.03.md"), "").unwrap();

    let output = weeknote(temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to move"), "{stderr}");
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
}

#[test]
fn test_date_out_of_range_exits_with_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_weeknote"))
        .arg("--notesdir")
        .arg(temp_dir.path())
        .arg(format!("--date={}", chrono::NaiveDate::MIN))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "{stderr}");
}

#[test]
fn test_create_dirs_flag() {
    let temp_dir = TempDir::new().unwrap();
    let notes = temp_dir.path().join("notes");

    let output = weeknote(&notes, &["--create-dirs", "--rotatedir", "old"]);
    assert!(output.status.success());
    assert!(notes.join("old").is_dir());
    assert!(notes.join("24.03.10.md").is_file());
}

#[test]
fn test_status_json_does_not_mutate() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("weekly")).unwrap();
    fs::write(temp_dir.path().join("24.03.03.md"), "").unwrap();

    let output = weeknote(temp_dir.path(), &["status", "--json"]);
    assert!(output.status.success());

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["current"]["file_name"], "24.03.10.md");
    assert_eq!(status["current"]["active"], false);
    assert_eq!(status["previous"]["active"], true);
    assert_eq!(status["today"], "2024-03-10");

    assert!(temp_dir.path().join("24.03.03.md").exists());
    assert!(!temp_dir.path().join("24.03.10.md").exists());
}

#[test]
fn test_bad_date_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_weeknote"))
        .arg("--notesdir")
        .arg(temp_dir.path())
        .args(["--date", "10/03/2024"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
