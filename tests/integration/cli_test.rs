//! CLI surface tests: help, version, completions, argument errors.

use crate::helpers::run_cole;

#[test]
fn help_exits_0_and_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_cole(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("show"));
    assert!(stdout.contains("spans"));
    assert!(stdout.contains("preview"));
    assert!(stdout.contains("completions"));
}

#[test]
fn version_exits_0() {
    let (stdout, _stderr, exit_code) = run_cole(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("cole"));
}

#[test]
fn show_help_documents_theme_flag() {
    let (stdout, _stderr, exit_code) = run_cole(&["show", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--theme"));
    assert!(stdout.contains("--plain"));
}

#[test]
fn unknown_theme_fails_with_message() {
    let (_stdout, stderr, exit_code) = run_cole(&["show", "--theme", "neon"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("neon"));
}

#[test]
fn completions_bash_generates_script() {
    let (stdout, _stderr, exit_code) = run_cole(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("cole"));
    assert!(!stdout.is_empty());
}

#[test]
fn unknown_subcommand_fails() {
    let (_stdout, _stderr, exit_code) = run_cole(&["bogus"]);
    assert_ne!(exit_code, 0);
}

#[test]
fn show_plain_succeeds_with_block_output() {
    use predicates::prelude::*;

    assert_cmd::Command::cargo_bin("cole")
        .unwrap()
        .args(["show", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("█"));
}
