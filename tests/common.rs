#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch dir so no real config is read.
pub fn tb() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("timebook_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("timebook");
    cmd.env("HOME", &home).env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timebook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    tb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Book each timestamp for `employee`, in the given order
pub fn book_all(db_path: &str, employee: &str, stamps: &[&str]) {
    for ts in stamps {
        tb().args(["--db", db_path, "book", employee, "--at", ts])
            .assert()
            .success();
    }
}
