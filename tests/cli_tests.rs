// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual unarchiver binary and verify its behavior.

mod common;

use std::path::PathBuf;
use std::process::{Command, Output};

use common::{msgpack, sample_document, TempDir};

/// Get the path to the built unarchiver binary
fn unarchiver_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_unarchiver"))
}

/// Run unarchiver with arguments
fn run(args: &[&str]) -> Output {
    let bin = unarchiver_bin();
    Command::new(&bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run unarchiver and assert success
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run unarchiver and assert failure, returning (stdout, stderr)
fn run_err(args: &[&str]) -> (String, String) {
    let output = run(args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn path_str(path: &std::path::Path) -> String {
    path.to_string_lossy().to_string()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"]);
    assert!(output.contains("Safe archive loading"));
    assert!(output.contains("inspect"));
    assert!(output.contains("check"));
    assert!(output.contains("detect"));
    assert!(output.contains("store"));
}

#[test]
fn test_missing_required_arg() {
    let (_, stderr) = run_err(&["inspect"]);
    assert!(stderr.contains("required") || stderr.contains("Usage"));
}

// ============================================================================
// Inspect / Check / Detect
// ============================================================================

#[test]
fn test_inspect_prints_json() {
    let dir = TempDir::new("cli_inspect");
    let path = dir.write("doc.msgpack", &msgpack(&sample_document()));

    let output = run_ok(&["inspect", "--compact", &path_str(&path)]);
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(value["title"], "Field notes");
    assert_eq!(value["id"], 7);
}

#[test]
fn test_inspect_unloadable_file_fails() {
    let dir = TempDir::new("cli_inspect_bad");
    let path = dir.write("bad.msgpack", b"\x83\xa1");

    let (_, stderr) = run_err(&["inspect", &path_str(&path)]);
    assert!(stderr.contains("Error: could not load"));
}

#[test]
fn test_inspect_invalid_format_flag() {
    let (_, stderr) = run_err(&["inspect", "--format", "plist", "x"]);
    assert!(stderr.contains("invalid archive format"));
}

#[test]
fn test_check_reports_each_file() {
    let dir = TempDir::new("cli_check");
    let good = dir.write("good.json", b"{\"ok\": true}");
    let missing = dir.path().join("missing.json");

    let output = run_ok(&["check", &path_str(&good)]);
    assert!(output.contains("good.json: ok"));

    let (stdout, stderr) = run_err(&["check", &path_str(&good), &path_str(&missing)]);
    assert!(stdout.contains("good.json: ok"));
    assert!(stdout.contains("missing.json: failed (not_found)"));
    assert!(stderr.contains("1 of 2 archives failed to load"));
}

#[test]
fn test_archive_outside_json_model() {
    let dir = TempDir::new("cli_int_keys");
    let names = std::collections::HashMap::from([(1u32, "one"), (2u32, "two")]);
    let path = dir.write("names", &msgpack(&names));

    let output = run_ok(&["check", &path_str(&path)]);
    assert!(output.contains("names: ok"));

    let (_, stderr) = run_err(&["inspect", &path_str(&path)]);
    assert!(stderr.contains("valid archive but cannot be shown as JSON"));
}

#[test]
fn test_detect() {
    let dir = TempDir::new("cli_detect");
    let mp = dir.write("data", &msgpack(&sample_document()));
    let js = dir.write("data2", b"  [1]");
    let unknown = dir.write("data3", b"hello");
    let scalar = dir.write("data4", &msgpack(&"hello"));

    assert_eq!(run_ok(&["detect", &path_str(&mp)]).trim(), "msgpack");
    assert_eq!(run_ok(&["detect", &path_str(&js)]).trim(), "json");
    assert_eq!(run_ok(&["detect", &path_str(&unknown)]).trim(), "unknown");
    assert_eq!(run_ok(&["detect", &path_str(&scalar)]).trim(), "msgpack");
}

// ============================================================================
// Store Commands
// ============================================================================

#[test]
fn test_store_stats_and_purge() {
    let dir = TempDir::new("cli_store");
    dir.write("entry_good", b"[1, 2, 3]");
    dir.write("entry_bad", b"\x00garbage");

    let root = path_str(dir.path());
    let stats = run_ok(&["store", "stats", &root]);
    assert!(stats.contains("Entries: 2"));

    let purge = run_ok(&["store", "purge", &root]);
    assert!(purge.contains("Purged 1 entries"));

    let stats = run_ok(&["store", "stats", &root]);
    assert!(stats.contains("Entries: 1"));
}

#[test]
fn test_store_trim() {
    let dir = TempDir::new("cli_trim");
    dir.write("a", b"[1]");
    dir.write("b", b"[2]");

    let output = run_ok(&["store", "trim", "--capacity", "0", &path_str(dir.path())]);
    assert!(output.contains("Evicted 2 entries"));
}
