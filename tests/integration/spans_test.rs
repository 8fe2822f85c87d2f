//! Tests for the spans command JSON output.

use serde_json::Value;

use crate::helpers::run_cole;

fn spans_json(args: &[&str]) -> Value {
    let (stdout, stderr, exit_code) = run_cole(args);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    serde_json::from_str(&stdout).expect("valid JSON")
}

#[test]
fn spans_emits_one_array_per_row() {
    let rows = spans_json(&["spans"]);
    assert_eq!(rows.as_array().unwrap().len(), 7);
}

#[test]
fn spans_runs_reconcatenate_to_plain_rows() {
    let rows = spans_json(&["spans", "--compact"]);
    let (plain, _, _) = run_cole(&["show", "--plain"]);

    for (row, expected) in rows.as_array().unwrap().iter().zip(plain.lines()) {
        let joined: String = row
            .as_array()
            .unwrap()
            .iter()
            .map(|run| run["text"].as_str().unwrap())
            .collect();
        assert_eq!(joined, expected);
    }
}

#[test]
fn spans_colors_are_css_strings_or_null() {
    let rows = spans_json(&["spans", "--compact"]);

    let mut saw_color = false;
    let mut saw_null = false;

    for row in rows.as_array().unwrap() {
        for run in row.as_array().unwrap() {
            match &run["color"] {
                Value::Null => saw_null = true,
                Value::String(s) => {
                    assert!(s.starts_with("rgb(") && s.ends_with(')'), "color {}", s);
                    saw_color = true;
                }
                other => panic!("unexpected color value {:?}", other),
            }
        }
    }

    assert!(saw_color, "no colored runs in output");
    assert!(saw_null, "no uncolored runs in output");
}

#[test]
fn spans_theme_changes_face_color() {
    let mint = spans_json(&["spans", "--compact"]).to_string();
    let ember = spans_json(&["spans", "--compact", "--theme", "ember"]).to_string();

    assert!(mint.contains("rgb(80, 250, 123)"));
    assert!(ember.contains("rgb(255, 140, 0)"));
    assert!(!ember.contains("rgb(80, 250, 123)"));
}
