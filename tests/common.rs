#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use punchclock::models::punch::Punch;
use punchclock::models::punch_type::PunchType;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so no real
/// configuration file is read.
pub fn pc() -> Command {
    let home = env::temp_dir().join("punchclock_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("punchclock");
    cmd.env("HOME", home).env_remove("PUNCHCLOCK_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    pc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid test timestamp")
        .with_timezone(&Utc)
}

pub fn punch_in(ts: &str) -> Punch {
    Punch::new(ts, PunchType::In)
}

pub fn punch_out(ts: &str) -> Punch {
    Punch::new(ts, PunchType::Out)
}
