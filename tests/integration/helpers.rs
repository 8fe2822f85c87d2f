//! Shared helpers for integration tests.

use std::process::Command;

/// Run the cole CLI and capture output.
///
/// `NO_COLOR` is set so assertions see plain text regardless of the
/// environment the tests run in.
pub fn run_cole(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_cole"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute cole");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
