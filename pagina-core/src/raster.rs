//! Point-query string rasterizer
//!
//! A [`RasterizedString`] records where each glyph of a string starts and
//! answers "is pixel (x, y) lit?" by finding the owning glyph and reading a
//! single bit of its packed bitmap. Renderers query it once per output
//! pixel and stream the result, so the string is never drawn into a
//! buffer.

use heapless::Vec;

use crate::font::{Font, Glyph};

/// Maximum number of characters a rasterized string keeps
///
/// Longer input is truncated silently.
pub const MAX_DISPLAYABLE_LEN: usize = 20;

#[derive(Debug, Clone, Copy)]
struct PlacedGlyph {
    glyph: Glyph,
    /// Start of the glyph's reserved space, in pixels from the string start
    start_x: u16,
}

/// A string laid out in a font, ready for pixel queries
///
/// Coordinates are relative to the top-left corner of the string's line
/// box: x grows to the right, y grows downwards, the box is
/// [`width`](Self::width) by the font's line advance.
#[derive(Debug, Clone)]
pub struct RasterizedString<'f> {
    font: &'f Font<'f>,
    glyphs: Vec<PlacedGlyph, MAX_DISPLAYABLE_LEN>,
    width: u16,
}

impl<'f> RasterizedString<'f> {
    /// Lay out `text` in `font`
    ///
    /// Each byte is a character code and must be covered by the font
    /// (see [`Font::printable`]). Only the first [`MAX_DISPLAYABLE_LEN`]
    /// bytes are kept.
    pub fn new(font: &'f Font<'f>, text: &str) -> Self {
        let mut glyphs = Vec::new();
        let mut width: u16 = 0;

        for &code in text.as_bytes() {
            let glyph = font.glyph(code);
            if glyphs.push(PlacedGlyph { glyph, start_x: width }).is_err() {
                break;
            }
            width += u16::from(glyph.x_advance);
        }

        Self {
            font,
            glyphs,
            width,
        }
    }

    /// Total width in pixels: the sum of all kept glyph advances
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of characters kept
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check whether no characters were kept
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The font the string is laid out in
    pub fn font(&self) -> &'f Font<'f> {
        self.font
    }

    /// Check whether pixel `(x, y)` of the rendered string is lit
    ///
    /// Anything outside `[0, width) x [0, y_advance)` is background.
    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        if x < 0
            || x >= i32::from(self.width)
            || y < 0
            || y >= i32::from(self.font.y_advance())
        {
            return false;
        }

        // Last glyph starting at or before x; on equal starts the later
        // glyph wins
        let mut index = 0;
        while index + 1 < self.glyphs.len() && i32::from(self.glyphs[index + 1].start_x) <= x {
            index += 1;
        }
        let placed = &self.glyphs[index];
        let glyph = &placed.glyph;

        let x_in_cell = x - i32::from(placed.start_x);
        let left = i32::from(glyph.x_offset);
        if x_in_cell < left || x_in_cell >= left + i32::from(glyph.width) {
            return false;
        }

        let top = i32::from(glyph.y_offset) - i32::from(self.font.baseline());
        if y < top || y >= top + i32::from(glyph.height) {
            return false;
        }

        // Both differences are non-negative after the checks above
        let col = (x_in_cell - left) as usize;
        let row = (y - top) as usize;
        let bit_index = row * usize::from(glyph.width) + col;

        let byte = self.font.bitmap_byte(glyph, bit_index / 8);
        byte & (0x80 >> (bit_index % 8)) != 0
    }
}
