//! Tests for the show command output.

use crate::helpers::run_cole;

#[test]
fn show_plain_prints_seven_rows() {
    let (stdout, _stderr, exit_code) = run_cole(&["show", "--plain"]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
}

#[test]
fn show_plain_contains_no_escape_codes() {
    let (stdout, _stderr, _) = run_cole(&["show", "--plain"]);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn no_color_env_disables_color_without_plain_flag() {
    // The helper sets NO_COLOR; output must match --plain exactly.
    let (without_flag, _, _) = run_cole(&["show"]);
    let (with_flag, _, _) = run_cole(&["show", "--plain"]);
    assert_eq!(without_flag, with_flag);
}

#[test]
fn default_invocation_shows_the_banner() {
    let (stdout, _stderr, exit_code) = run_cole(&[]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains('█'));
}

#[test]
fn banner_rows_are_uniform_width() {
    let (stdout, _, _) = run_cole(&["show", "--plain"]);

    let widths: Vec<usize> = stdout.lines().map(|l| l.chars().count()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "widths {:?}", widths);
}

#[test]
fn banner_matches_snapshot() {
    let (stdout, _, _) = run_cole(&["show", "--plain"]);

    // Trailing padding trimmed per row so the snapshot stays stable.
    let trimmed: String = stdout
        .lines()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(trimmed, @r#"
     ▄▄▄▄▄▄    ▄▄▄▄▄▄   ▄▄        ▄▄▄▄▄▄▄
     ██████╗   ██████╗  ██╗       ███████╗
    ██╔════╝  ██╔═══██╗ ██║       ██╔════╝
    ██║       ██║   ██║ ██║       █████╗
    ██║       ██║   ██║ ██║       ██╔══╝
    ╚██████╗  ╚██████╔╝ ███████╗  ███████╗
     ╚═════╝   ╚═════╝  ╚══════╝  ╚══════╝
    "#);
}
