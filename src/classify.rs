//! Character classification for logo coloring.
//!
//! Every character of a composed logo row belongs to at most one class:
//! the solid block face, the partial-block outline accents, or the
//! double-line box-drawing drop shadow. Classification is a pure function
//! of the character alone, never of its position.

/// Color class of a single logo character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// The solid full-block face of a letter (`█`).
    Face,
    /// Partial-block edge characters used for caps and accents.
    Outline,
    /// Double-line box-drawing characters forming the drop shadow.
    Shadow,
}

/// Partial-block characters that read as letter outline.
const OUTLINE_CHARS: &[char] = &['▀', '▄', '▌', '▐', '▛', '▜', '▙', '▟', '░', '▒', '▓'];

/// Double-line box-drawing characters forming the shadow.
const SHADOW_CHARS: &[char] = &['═', '║', '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩', '╬'];

/// Classify one character. Total; spaces and anything unlisted are `None`.
///
/// First match wins: face, then outline, then shadow.
pub fn classify(c: char) -> Option<CharClass> {
    if c == '█' {
        Some(CharClass::Face)
    } else if OUTLINE_CHARS.contains(&c) {
        Some(CharClass::Outline)
    } else if SHADOW_CHARS.contains(&c) {
        Some(CharClass::Shadow)
    } else {
        None
    }
}
