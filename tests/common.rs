#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed "now" shared by the CLI tests.
pub const NOW: &str = "2025-06-15T12:00:00Z";

pub fn rst() -> Command {
    cargo_bin_cmd!("rstreak")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstreak.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB whose streak starts at `NOW`.
pub fn init_db(db_path: &str) {
    rst()
        .args(["--db", db_path, "--test", "--at", NOW, "init"])
        .assert()
        .success();
}

/// Run `status --json` at `at` and parse the output.
pub fn status_json(db_path: &str, at: &str) -> serde_json::Value {
    let out = rst()
        .args(["--db", db_path, "--test", "--at", at, "status", "--json"])
        .output()
        .expect("failed to run status");
    assert!(out.status.success(), "status failed: {:?}", out);
    serde_json::from_slice(&out.stdout).expect("status --json is not valid JSON")
}
