// SPDX-License-Identifier: Apache-2.0

//! CLI integration tests — run the pseudover binary as a subprocess.
//!
//! The tool is stateless (stdin/config/env untouched), so each test is just
//! an invocation plus assertions on stdout, stderr, and the exit status.

use std::process::Command;

/// Helper: run pseudover with the given arguments.
fn pseudover_cmd(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pseudover"))
        .args(args)
        .output()
        .expect("failed to execute pseudover binary")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ── Version & Help ──────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let out = pseudover_cmd(&["--version"]);
    assert!(out.status.success());
    assert!(
        stdout_of(&out).contains("pseudover 0."),
        "unexpected: {}",
        stdout_of(&out)
    );
}

#[test]
fn test_cli_help() {
    let out = pseudover_cmd(&["--help"]);
    assert!(out.status.success());
    assert!(
        stdout_of(&out).contains("pseudo-version"),
        "unexpected: {}",
        stdout_of(&out)
    );
}

// ── End-to-end stamping ─────────────────────────────────────────

#[test]
fn test_cli_stamps_utc_date() {
    let out = pseudover_cmd(&["a1b2c3d4e5f6a7b8", "Mon Jan 2 15:04:05 2023 +0000"]);
    assert!(out.status.success(), "failed: {}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "v0.0.0-20230102150405-a1b2c3d4e5f6\n");
}

#[test]
fn test_cli_normalizes_offset_to_utc() {
    let out = pseudover_cmd(&["a1b2c3d4e5f6a7b8", "Mon Jan 2 15:04:05 2023 -0700"]);
    assert!(out.status.success(), "failed: {}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "v0.0.0-20230102220405-a1b2c3d4e5f6\n");
}

#[test]
fn test_cli_short_hash_used_whole() {
    let out = pseudover_cmd(&["abc", "Mon Jan 2 15:04:05 2023 -0700"]);
    assert!(out.status.success(), "failed: {}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "v0.0.0-20230102220405-abc\n");
}

// ── Malformed date ──────────────────────────────────────────────

#[test]
fn test_cli_malformed_date_fails() {
    let out = pseudover_cmd(&["a1b2c3d4e5f6", "not a date"]);
    assert!(!out.status.success(), "garbage date should fail");
    assert!(
        stdout_of(&out).is_empty(),
        "no output on failure, got: {}",
        stdout_of(&out)
    );
    assert!(
        stderr_of(&out).contains("not a date"),
        "diagnostic should name the input: {}",
        stderr_of(&out)
    );
}

#[test]
fn test_cli_date_without_offset_fails() {
    let out = pseudover_cmd(&["a1b2c3d4e5f6", "Mon Jan 2 15:04:05 2023"]);
    assert!(!out.status.success(), "offset-less date should fail");
    assert!(stdout_of(&out).is_empty());
}

// ── Missing arguments ───────────────────────────────────────────

#[test]
fn test_cli_missing_args_shows_usage() {
    let none = pseudover_cmd(&[]);
    assert!(!none.status.success(), "no args should fail");
    assert!(
        stderr_of(&none).contains("Usage"),
        "expected usage message: {}",
        stderr_of(&none)
    );

    let one = pseudover_cmd(&["a1b2c3d4e5f6"]);
    assert!(!one.status.success(), "single arg should fail");
    assert!(stdout_of(&one).is_empty());
}
