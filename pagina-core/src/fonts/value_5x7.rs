//! 5x7 value font, one page high
//!
//! Digits, sign, separators and percent. Glyph bitmaps are bit-packed
//! row-major, MSB first, each glyph starting on a byte boundary.

use crate::font::{GfxFont, Glyph};

const BITMAP: [u8; 69] = [
    0xCE, 0x84, 0x44, 0x2E, 0x60, 0x21, 0x3E, 0x42, 0x00, 0xD8, 0xF8, 0xF0,
    0x08, 0x84, 0x44, 0x22, 0x00, 0x74, 0x67, 0x5C, 0xC5, 0xC0, 0x23, 0x08,
    0x42, 0x11, 0xC0, 0x74, 0x42, 0x22, 0x23, 0xE0, 0xF8, 0x88, 0x20, 0xC5,
    0xC0, 0x11, 0x95, 0x2F, 0x88, 0x40, 0xFC, 0x3C, 0x10, 0xC5, 0xC0, 0x32,
    0x21, 0xE8, 0xC5, 0xC0, 0xF8, 0x44, 0x44, 0x21, 0x00, 0x74, 0x62, 0xE8,
    0xC5, 0xC0, 0x74, 0x62, 0xF0, 0x89, 0x80, 0xF3, 0xC0,
];

const GLYPHS: [Glyph; 27] = [
    Glyph::new(0, 0, 0, 6, 0, 0), // ' '
    Glyph::new(0, 0, 0, 6, 0, 0), // '!'
    Glyph::new(0, 0, 0, 6, 0, 0), // '"'
    Glyph::new(0, 0, 0, 6, 0, 0), // '#'
    Glyph::new(0, 0, 0, 6, 0, 0), // '$'
    Glyph::new(0, 5, 7, 6, 0, -7), // '%'
    Glyph::new(5, 0, 0, 6, 0, 0), // '&'
    Glyph::new(5, 0, 0, 6, 0, 0), // "'"
    Glyph::new(5, 0, 0, 6, 0, 0), // '('
    Glyph::new(5, 0, 0, 6, 0, 0), // ')'
    Glyph::new(5, 0, 0, 6, 0, 0), // '*'
    Glyph::new(5, 5, 5, 6, 0, -6), // '+'
    Glyph::new(9, 2, 3, 3, 0, -2), // ','
    Glyph::new(10, 5, 1, 6, 0, -4), // '-'
    Glyph::new(11, 2, 2, 3, 0, -2), // '.'
    Glyph::new(12, 5, 7, 6, 0, -7), // '/'
    Glyph::new(17, 5, 7, 6, 0, -7), // '0'
    Glyph::new(22, 5, 7, 6, 0, -7), // '1'
    Glyph::new(27, 5, 7, 6, 0, -7), // '2'
    Glyph::new(32, 5, 7, 6, 0, -7), // '3'
    Glyph::new(37, 5, 7, 6, 0, -7), // '4'
    Glyph::new(42, 5, 7, 6, 0, -7), // '5'
    Glyph::new(47, 5, 7, 6, 0, -7), // '6'
    Glyph::new(52, 5, 7, 6, 0, -7), // '7'
    Glyph::new(57, 5, 7, 6, 0, -7), // '8'
    Glyph::new(62, 5, 7, 6, 0, -7), // '9'
    Glyph::new(67, 2, 5, 3, 0, -6), // ':'
];

/// Font resource: `' '..=':'`, line advance 8 px
pub const VALUE_5X7: GfxFont<'static> = GfxFont {
    bitmap: &BITMAP,
    glyphs: &GLYPHS,
    first: 0x20,
    last: 0x3A,
    y_advance: 8,
};
