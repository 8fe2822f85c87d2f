//! Static block-letter glyph table and row composition.
//!
//! Each glyph is 7 rows tall and a fixed width: a partial-block cap row,
//! a solid `█` face with a double-line drop shadow underneath and to the
//! right. Rows of adjacent glyphs are joined with a single-space gap to
//! form the full logo lines.

/// Height of every glyph, in rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Gap between adjacent glyphs.
const SEPARATOR: &str = " ";

/// The word the logo spells.
pub const LOGO_WORD: &str = "COLE";

const GLYPH_C: [&str; GLYPH_HEIGHT] = [
    " ▄▄▄▄▄▄  ",
    " ██████╗ ",
    "██╔════╝ ",
    "██║      ",
    "██║      ",
    "╚██████╗ ",
    " ╚═════╝ ",
];

const GLYPH_O: [&str; GLYPH_HEIGHT] = [
    " ▄▄▄▄▄▄  ",
    " ██████╗ ",
    "██╔═══██╗",
    "██║   ██║",
    "██║   ██║",
    "╚██████╔╝",
    " ╚═════╝ ",
];

const GLYPH_L: [&str; GLYPH_HEIGHT] = [
    "▄▄       ",
    "██╗      ",
    "██║      ",
    "██║      ",
    "██║      ",
    "███████╗ ",
    "╚══════╝ ",
];

const GLYPH_E: [&str; GLYPH_HEIGHT] = [
    "▄▄▄▄▄▄▄  ",
    "███████╗ ",
    "██╔════╝ ",
    "█████╗   ",
    "██╔══╝   ",
    "███████╗ ",
    "╚══════╝ ",
];

/// Look up a letter's glyph rows.
fn glyph(letter: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match letter {
        'C' => Some(&GLYPH_C),
        'O' => Some(&GLYPH_O),
        'L' => Some(&GLYPH_L),
        'E' => Some(&GLYPH_E),
        _ => None,
    }
}

/// Compose a word into its logo rows, one line per row index.
///
/// Letters outside the table are a caller error; they are debug-asserted
/// and skipped rather than defended against.
pub fn compose(word: &str) -> Vec<String> {
    let glyphs: Vec<_> = word
        .chars()
        .filter_map(|letter| {
            let g = glyph(letter);
            debug_assert!(g.is_some(), "no glyph for {:?}", letter);
            g
        })
        .collect();

    (0..GLYPH_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(SEPARATOR)
        })
        .collect()
}
