//! Glyph metrics for the builtin Helvetica faces.
//!
//! Builtin PDF fonts are WinAnsi encoded; anything outside that repertoire
//! cannot be drawn with them. Widths are the Adobe AFM advance widths in
//! thousandths of an em.

use super::document::TextStyle;
use crate::error::{Result, RiskError};

// WinAnsi 0x80..=0x9F, in code order. `None` marks unassigned codes.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

// 0x20..=0x7E
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// 0x80..=0x9F, 0 for unassigned codes
const HELVETICA_HIGH: [u16; 32] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
];

const HELVETICA_BOLD_HIGH: [u16; 32] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
];

// 0xA0..=0xFF
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// WinAnsi code for `c`, if the builtin fonts can draw it.
pub fn win_ansi_code(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|entry| *entry == Some(c))
            .map(|offset| 0x80 + offset as u8),
    }
}

/// Advance width of `c` in thousandths of an em.
pub fn glyph_units(c: char, bold: bool) -> Option<u16> {
    let code = win_ansi_code(c)?;
    let index = usize::from(code);
    let units = match (code, bold) {
        (0x20..=0x7E, false) => HELVETICA_ASCII[index - 0x20],
        (0x20..=0x7E, true) => HELVETICA_BOLD_ASCII[index - 0x20],
        (0x80..=0x9F, false) => HELVETICA_HIGH[index - 0x80],
        (0x80..=0x9F, true) => HELVETICA_BOLD_HIGH[index - 0x80],
        (_, false) => HELVETICA_LATIN1[index - 0xA0],
        (_, true) => HELVETICA_BOLD_LATIN1[index - 0xA0],
    };
    Some(units)
}

/// Width of one character at `style`, in points.
pub fn char_width(c: char, style: &TextStyle) -> Result<f32> {
    glyph_units(c, style.bold)
        .map(|units| f32::from(units) * style.size / 1000.0)
        .ok_or_else(|| {
            RiskError::render(format!(
                "character '{}' (U+{:04X}) cannot be drawn with the builtin PDF fonts",
                c, c as u32
            ))
        })
}

/// Width of `text` at `style`, in points.
pub fn text_width(text: &str, style: &TextStyle) -> Result<f32> {
    text.chars().map(|c| char_width(c, style)).sum()
}
