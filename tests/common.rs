#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// bizdesk with colors off and a config dir nobody writes to,
/// so the user's real configuration never leaks into a test.
pub fn bd() -> Command {
    let mut cmd = cargo_bin_cmd!("bizdesk");
    cmd.env("BIZDESK_CONFIG_DIR", empty_config_dir())
        .env("NO_COLOR", "1")
        .env_remove("BIZDESK_CHAT_API_KEY")
        .env_remove("BIZDESK_EMAIL_USER_ID");
    cmd
}

pub fn empty_config_dir() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("bizdesk_tests_no_config");
    path.to_string_lossy().to_string()
}

/// Fresh directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bizdesk_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bizdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bizdesk_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Empty schema, nothing else
pub fn init_empty_db(db_path: &str) {
    bd().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Schema plus the demonstration dataset
pub fn init_db_with_data(db_path: &str) {
    bd().args(["--db", db_path, "--test", "init", "--sample"])
        .assert()
        .success();
}

/// Position of `needle` in `haystack`, panicking when absent
pub fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in:\n{}", needle, haystack))
}
