//! 15x21 value font, three pages high
//!
//! The 5x7 design at three times the size, for the main readout.

use crate::font::{GfxFont, Glyph};

const BITMAP: [u8; 539] = [
    0xFC, 0x0F, 0xF8, 0x1F, 0xF0, 0x3F, 0xE3, 0x8F, 0xC7, 0x1F, 0x8E, 0x00,
    0x1C, 0x00, 0x38, 0x00, 0x70, 0x07, 0x00, 0x0E, 0x00, 0x1C, 0x01, 0xC0,
    0x03, 0x80, 0x07, 0x00, 0x0E, 0x3F, 0x1C, 0x7E, 0x38, 0xFF, 0x81, 0xFF,
    0x03, 0xFE, 0x07, 0xE0, 0x03, 0x80, 0x07, 0x00, 0x0E, 0x00, 0x1C, 0x00,
    0x38, 0x00, 0x70, 0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0x07, 0x00, 0x0E,
    0x00, 0x1C, 0x00, 0x38, 0x00, 0x70, 0x00, 0xE0, 0x00, 0xFF, 0xFF, 0xC7,
    0x1C, 0x7E, 0x38, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF8, 0xFF, 0xFF,
    0xFF, 0xFF, 0xF0, 0x00, 0x0E, 0x00, 0x1C, 0x00, 0x38, 0x03, 0x80, 0x07,
    0x00, 0x0E, 0x00, 0x1C, 0x00, 0x38, 0x00, 0x70, 0x07, 0x00, 0x0E, 0x00,
    0x1C, 0x01, 0xC0, 0x03, 0x80, 0x07, 0x00, 0x0E, 0x00, 0x1C, 0x00, 0x38,
    0x03, 0x80, 0x07, 0x00, 0x0E, 0x00, 0x00, 0x1F, 0xF0, 0x3F, 0xE0, 0x7F,
    0xC7, 0x00, 0x7E, 0x00, 0xFC, 0x01, 0xF8, 0x1F, 0xF0, 0x3F, 0xE0, 0x7F,
    0xC7, 0x1F, 0x8E, 0x3F, 0x1C, 0x7F, 0xC0, 0xFF, 0x81, 0xFF, 0x03, 0xF0,
    0x07, 0xE0, 0x0F, 0xC0, 0x1C, 0x7F, 0xC0, 0xFF, 0x81, 0xFF, 0x00, 0x03,
    0x80, 0x07, 0x00, 0x0E, 0x00, 0xFC, 0x01, 0xF8, 0x03, 0xF0, 0x00, 0xE0,
    0x01, 0xC0, 0x03, 0x80, 0x07, 0x00, 0x0E, 0x00, 0x1C, 0x00, 0x38, 0x00,
    0x70, 0x00, 0xE0, 0x01, 0xC0, 0x03, 0x80, 0x07, 0x00, 0x7F, 0xC0, 0xFF,
    0x81, 0xFF, 0x00, 0x1F, 0xF0, 0x3F, 0xE0, 0x7F, 0xC7, 0x00, 0x7E, 0x00,
    0xFC, 0x01, 0xC0, 0x03, 0x80, 0x07, 0x00, 0x0E, 0x00, 0xE0, 0x01, 0xC0,
    0x03, 0x80, 0x38, 0x00, 0x70, 0x00, 0xE0, 0x0E, 0x00, 0x1C, 0x00, 0x38,
    0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xF8, 0x03, 0x80, 0x07, 0x00, 0x0E, 0x00, 0xE0, 0x01, 0xC0, 0x03, 0x80,
    0x00, 0xE0, 0x01, 0xC0, 0x03, 0x80, 0x00, 0xE0, 0x01, 0xC0, 0x03, 0xF0,
    0x07, 0xE0, 0x0F, 0xC0, 0x1C, 0x7F, 0xC0, 0xFF, 0x81, 0xFF, 0x00, 0x00,
    0x70, 0x00, 0xE0, 0x01, 0xC0, 0x1F, 0x80, 0x3F, 0x00, 0x7E, 0x07, 0x1C,
    0x0E, 0x38, 0x1C, 0x71, 0xC0, 0xE3, 0x81, 0xC7, 0x03, 0x8F, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0x80, 0x38, 0x00, 0x70, 0x00, 0xE0, 0x01, 0xC0, 0x03,
    0x80, 0x07, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x0E, 0x00,
    0x1C, 0x00, 0x3F, 0xFC, 0x7F, 0xF8, 0xFF, 0xF0, 0x00, 0x1C, 0x00, 0x38,
    0x00, 0x70, 0x00, 0xE0, 0x01, 0xC0, 0x03, 0xF0, 0x07, 0xE0, 0x0F, 0xC0,
    0x1C, 0x7F, 0xC0, 0xFF, 0x81, 0xFF, 0x00, 0x03, 0xF0, 0x07, 0xE0, 0x0F,
    0xC0, 0xE0, 0x01, 0xC0, 0x03, 0x80, 0x38, 0x00, 0x70, 0x00, 0xE0, 0x01,
    0xFF, 0xE3, 0xFF, 0xC7, 0xFF, 0x8E, 0x00, 0xFC, 0x01, 0xF8, 0x03, 0xF0,
    0x07, 0xE0, 0x0F, 0xC0, 0x1C, 0x7F, 0xC0, 0xFF, 0x81, 0xFF, 0x00, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xF8, 0x00, 0x70, 0x00, 0xE0, 0x01, 0xC0, 0x1C,
    0x00, 0x38, 0x00, 0x70, 0x07, 0x00, 0x0E, 0x00, 0x1C, 0x01, 0xC0, 0x03,
    0x80, 0x07, 0x00, 0x0E, 0x00, 0x1C, 0x00, 0x38, 0x00, 0x70, 0x00, 0xE0,
    0x01, 0xC0, 0x00, 0x1F, 0xF0, 0x3F, 0xE0, 0x7F, 0xC7, 0x00, 0x7E, 0x00,
    0xFC, 0x01, 0xF8, 0x03, 0xF0, 0x07, 0xE0, 0x0E, 0x3F, 0xE0, 0x7F, 0xC0,
    0xFF, 0x8E, 0x00, 0xFC, 0x01, 0xF8, 0x03, 0xF0, 0x07, 0xE0, 0x0F, 0xC0,
    0x1C, 0x7F, 0xC0, 0xFF, 0x81, 0xFF, 0x00, 0x1F, 0xF0, 0x3F, 0xE0, 0x7F,
    0xC7, 0x00, 0x7E, 0x00, 0xFC, 0x01, 0xF8, 0x03, 0xF0, 0x07, 0xE0, 0x0E,
    0x3F, 0xFC, 0x7F, 0xF8, 0xFF, 0xF0, 0x00, 0xE0, 0x01, 0xC0, 0x03, 0x80,
    0x38, 0x00, 0x70, 0x00, 0xE0, 0x7E, 0x00, 0xFC, 0x01, 0xF8, 0x00, 0xFF,
    0xFF, 0xFF, 0xFF, 0xF0, 0x00, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0xC0,
];

const GLYPHS: [Glyph; 27] = [
    Glyph::new(0, 0, 0, 18, 0, 0), // ' '
    Glyph::new(0, 0, 0, 18, 0, 0), // '!'
    Glyph::new(0, 0, 0, 18, 0, 0), // '"'
    Glyph::new(0, 0, 0, 18, 0, 0), // '#'
    Glyph::new(0, 0, 0, 18, 0, 0), // '$'
    Glyph::new(0, 15, 21, 18, 0, -21), // '%'
    Glyph::new(40, 0, 0, 18, 0, 0), // '&'
    Glyph::new(40, 0, 0, 18, 0, 0), // "'"
    Glyph::new(40, 0, 0, 18, 0, 0), // '('
    Glyph::new(40, 0, 0, 18, 0, 0), // ')'
    Glyph::new(40, 0, 0, 18, 0, 0), // '*'
    Glyph::new(40, 15, 15, 18, 0, -18), // '+'
    Glyph::new(69, 6, 9, 9, 0, -6), // ','
    Glyph::new(76, 15, 3, 18, 0, -12), // '-'
    Glyph::new(82, 6, 6, 9, 0, -6), // '.'
    Glyph::new(87, 15, 21, 18, 0, -21), // '/'
    Glyph::new(127, 15, 21, 18, 0, -21), // '0'
    Glyph::new(167, 15, 21, 18, 0, -21), // '1'
    Glyph::new(207, 15, 21, 18, 0, -21), // '2'
    Glyph::new(247, 15, 21, 18, 0, -21), // '3'
    Glyph::new(287, 15, 21, 18, 0, -21), // '4'
    Glyph::new(327, 15, 21, 18, 0, -21), // '5'
    Glyph::new(367, 15, 21, 18, 0, -21), // '6'
    Glyph::new(407, 15, 21, 18, 0, -21), // '7'
    Glyph::new(447, 15, 21, 18, 0, -21), // '8'
    Glyph::new(487, 15, 21, 18, 0, -21), // '9'
    Glyph::new(527, 6, 15, 9, 0, -18), // ':'
];

/// Font resource: `' '..=':'`, line advance 24 px
pub const VALUE_15X21: GfxFont<'static> = GfxFont {
    bitmap: &BITMAP,
    glyphs: &GLYPHS,
    first: 0x20,
    last: 0x3A,
    y_advance: 24,
};
