//! Smoke tests for the `kan` binary surface.
//!
//! The board itself needs a terminal, so these stick to flag handling.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the built `kan` binary.
fn kan_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("kan");
    path
}

#[test]
fn help_lists_the_data_dir_flag() {
    let output = Command::new(kan_bin()).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--data-dir"));
    assert!(stdout.contains("task board"));
}

#[test]
fn version_prints_and_exits() {
    let output = Command::new(kan_bin()).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flags_are_rejected() {
    let output = Command::new(kan_bin()).arg("--bogus").output().unwrap();

    assert!(!output.status.success());
}
