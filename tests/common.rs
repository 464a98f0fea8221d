#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("shiftledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB schema at `db_path`
pub fn init_db(db_path: &str) {
    sl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one shift via the CLI
pub fn add_shift(db_path: &str, date: &str, employer: &str, site: &str, hours: &str, rate: &str) {
    sl().args([
        "--db", db_path, "add", date, "--employer", employer, "--site", site, "--start", "09:00",
        "--hours", hours, "--rate", rate,
    ])
    .assert()
    .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_shift(db_path, "2025-09-01", "Acme Ltd", "Warehouse A", "7.5", "12.50");
    add_shift(db_path, "2025-09-15", "Acme Ltd", "Warehouse B", "8", "12.50");
    add_shift(db_path, "2025-09-20", "Northline", "Depot", "6", "14.00");
}
