// Shared test helpers for integration tests that drive the compiled binary.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_getarg"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary with the given args.
/// Returns (stdout, stderr, exit_code).
pub fn run_getarg(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .env_remove("GETARG_LOG")
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Writes `content` to a temp query file. Keep the handle alive while the
/// path is in use.
pub fn query_file(content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp query file");
    tmpfile
        .write_all(content.as_bytes())
        .expect("failed to write query file");
    tmpfile
}

pub fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}

/// The `value` field of the resolved option called `name`.
pub fn value_of(report: &serde_json::Value, name: &str) -> serde_json::Value {
    report["options"]
        .as_array()
        .expect("options should be an array")
        .iter()
        .find(|o| o["name"] == name)
        .unwrap_or_else(|| panic!("no option {name} in {report}"))["value"]
        .clone()
}
