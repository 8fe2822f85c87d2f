//! Colorizer: plain logo rows to truecolor-marked lines.
//!
//! Walks a composed row left to right and wraps each maximal run of
//! same-colored characters in SGR truecolor escapes. The output is plain
//! terminal-ready text; [`crate::decode`] parses it back into styled runs.

use crate::classify::classify;
use crate::color::Rgb;
use crate::theme::Theme;

/// Start-of-color marker for a truecolor foreground.
fn push_start(buf: &mut String, color: Rgb) {
    buf.push_str("\x1b[38;2;");
    buf.push_str(&color.r.to_string());
    buf.push(';');
    buf.push_str(&color.g.to_string());
    buf.push(';');
    buf.push_str(&color.b.to_string());
    buf.push('m');
}

/// Reset marker.
const RESET: &str = "\x1b[0m";

/// Colorize one composed row.
///
/// Maintains the currently active color; a classified color different from
/// the active one emits a transition before the character itself. Two
/// adjacent runs of different colors emit back-to-back start markers with
/// no reset in between - the later marker overrides the earlier one, which
/// downstream consumers must honor (last marker wins). A trailing reset is
/// emitted if a color is still active at end of line.
pub fn colorize(line: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    let mut active: Option<Rgb> = None;

    for c in line.chars() {
        let color = classify(c).map(|class| theme.color_for(class));

        if color != active {
            match color {
                Some(rgb) => push_start(&mut out, rgb),
                None => out.push_str(RESET),
            }
            active = color;
        }

        out.push(c);
    }

    if active.is_some() {
        out.push_str(RESET);
    }

    out
}
