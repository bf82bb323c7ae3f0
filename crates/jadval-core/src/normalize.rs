//! Character-order correction for extracted text.

use crate::frame::Frame;

/// How to repair the character order of text coming out of the extraction
/// backend.
///
/// Right-to-left scripts can come back in visual order, reversed relative to
/// logical reading order. Whether reversal is the right fix depends entirely
/// on the backend's quirks, so the step is selectable rather than
/// hard-wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFix {
    /// Leave text exactly as extracted.
    None,
    /// Reverse the character sequence of every string.
    #[default]
    ReverseChars,
}

impl TextFix {
    /// Apply the fix to one string.
    pub fn apply(&self, s: &str) -> String {
        match self {
            TextFix::None => s.to_string(),
            TextFix::ReverseChars => s.chars().rev().collect(),
        }
    }
}

/// Rewrite every text cell of `frame` through `fix`.
///
/// Number and missing cells pass through untouched; the frame's shape never
/// changes. Reversal is an involution: normalizing twice restores the
/// original cells.
pub fn normalize(frame: &mut Frame, fix: TextFix) {
    if fix == TextFix::None {
        return;
    }
    frame.map_text(|s| fix.apply(s));
}
