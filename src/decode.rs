//! Decoder: truecolor-marked lines back into styled runs.
//!
//! Parses the exact escape grammar the colorizer emits - truecolor start
//! markers (`ESC [ 38;2;R;G;B m`) and resets (`ESC [ 0 m`) - and splits
//! the line into ordered (text, color) spans for the presentation layer.
//! Decoding is best-effort and never fails: a malformed or unrecognized
//! payload leaves the color unset for the following span.

use serde::Serialize;

use crate::color::{serialize_css, Rgb};

/// A maximal span of characters sharing one active color.
///
/// `color` serializes as a CSS `rgb(r, g, b)` string (or null) so the
/// sequence can be handed to non-terminal hosts as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub text: String,
    #[serde(serialize_with = "serialize_css")]
    pub color: Option<Rgb>,
}

/// Split a marked line into styled runs.
///
/// The most recently seen marker decides the color of the following text;
/// back-to-back start markers are legal and the last one wins. Zero-length
/// gaps between markers produce no run.
pub fn styled_runs(line: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut text = String::new();
    let mut color: Option<Rgb> = None;

    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            let next = consume_marker(&mut chars);

            if !text.is_empty() {
                runs.push(StyledRun {
                    text: std::mem::take(&mut text),
                    color,
                });
            }
            color = next;
        } else {
            text.push(c);
        }
    }

    if !text.is_empty() {
        runs.push(StyledRun { text, color });
    }

    runs
}

/// Consume a marker payload up to and including the terminating `m`.
///
/// Returns the color the marker activates: `Some` for a well-formed
/// truecolor start, `None` for a reset or anything unrecognized. A
/// truncated marker (end of line before `m`) swallows the remainder.
fn consume_marker(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<Rgb> {
    let mut payload = String::new();

    for c in chars.by_ref() {
        if c == 'm' {
            return parse_payload(&payload);
        }
        if !c.is_ascii_digit() && c != ';' {
            // Not part of the marker grammar; abandon the sequence.
            return None;
        }
        payload.push(c);
    }

    None
}

/// Interpret a marker payload. Only `0` and `38;2;R;G;B` are recognized.
fn parse_payload(payload: &str) -> Option<Rgb> {
    let mut fields = payload.split(';');

    match (fields.next(), fields.next()) {
        (Some("0"), None) => None,
        (Some("38"), Some("2")) => {
            let r = fields.next()?.parse().ok()?;
            let g = fields.next()?.parse().ok()?;
            let b = fields.next()?.parse().ok()?;
            if fields.next().is_some() {
                return None;
            }
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}
