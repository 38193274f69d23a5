//! End-to-end checks over the compiled binary
//!
//! The json output modes must emit nothing but the JSON document on
//! stdout; map and status decoration belongs on stderr.

use std::path::Path;
use std::process::{Command, Output};

use spotfinder::storage::seed::SEED_LOCATIONS;

fn spotfinder(dir: &Path, db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spotfinder"))
        .args(args)
        .arg("--database")
        .arg(db)
        .current_dir(dir)
        .output()
        .expect("binary runs")
}

#[test]
fn test_find_json_stdout_is_pure_json() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("spotfinder.db");

    let out = spotfinder(
        dir.path(),
        &db,
        &["find", "--query", "cn tower", "--format", "json"],
    );
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let found: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout parses as json");
    assert_eq!(found["address"], "CN Tower, Toronto, ON");
}

#[test]
fn test_list_json_stdout_is_pure_json() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("spotfinder.db");

    let out = spotfinder(dir.path(), &db, &["list", "--format", "json"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let all: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout parses as json");
    assert_eq!(all.as_array().unwrap().len(), SEED_LOCATIONS.len());
}

#[test]
fn test_find_miss_exits_nonzero_with_message_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("spotfinder.db");

    let out = spotfinder(
        dir.path(),
        &db,
        &["find", "--query", "no such place anywhere"],
    );
    assert!(!out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Address not found"));
}
