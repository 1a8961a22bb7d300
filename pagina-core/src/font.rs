//! Glyph table over compiled-in fonts
//!
//! Fonts use the Adafruit GFX layout: a contiguous single-byte character
//! range, one [`Glyph`] record per code and a shared bitmap store. Each
//! glyph's bitmap is one contiguous bitstream, row-major and MSB first,
//! with no padding at row ends: pixel `(col, row)` is bit
//! `row * width + col` counted from the glyph's first byte.

use heapless::String;

use crate::raster::MAX_DISPLAYABLE_LEN;

/// Metrics and bitmap location of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Byte offset of the glyph bitmap in the font's bitmap store
    pub bitmap_offset: u16,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Horizontal space reserved for the character, gap included
    pub x_advance: u8,
    /// Left bearing: bitmap start within the reserved space
    pub x_offset: i8,
    /// Bitmap top relative to the baseline, usually negative
    pub y_offset: i8,
}

impl Glyph {
    /// Create a glyph record
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// Number of bitmap bytes this glyph occupies
    pub const fn bitmap_len(&self) -> usize {
        (self.width as usize * self.height as usize + 7) / 8
    }
}

/// Read-only font resource
///
/// `glyphs[i]` describes character code `first + i`.
#[derive(Debug, Clone, Copy)]
pub struct GfxFont<'a> {
    /// Packed glyph bitmaps
    pub bitmap: &'a [u8],
    /// Glyph records, one per code in `first..=last`
    pub glyphs: &'a [Glyph],
    /// First character code covered
    pub first: u8,
    /// Last character code covered
    pub last: u8,
    /// Line advance in pixels
    pub y_advance: u8,
}

/// Glyph table with the derived baseline
///
/// Built once per font (at compile time for the bundled fonts) and
/// borrowed by every rasterized string; nothing ever copies the font data.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    resource: &'a GfxFont<'a>,
    baseline: i16,
}

impl<'a> Font<'a> {
    /// Build the glyph table, scanning every glyph once for the baseline
    ///
    /// The baseline centers the tallest ascender and the deepest descender
    /// of the whole range inside the line advance, instead of using the
    /// font's authored baseline:
    ///
    /// `baseline = -max_ascent - (y_advance - max_ascent - max_descent) / 2`
    ///
    /// The division truncates toward zero. The result is negative and
    /// relative to the top of the line.
    pub const fn new(resource: &'a GfxFont<'a>) -> Self {
        let mut max_ascent: i16 = 0;
        let mut max_descent: i16 = 0;

        let mut count = if resource.last >= resource.first {
            (resource.last - resource.first) as usize + 1
        } else {
            0
        };
        if count > resource.glyphs.len() {
            count = resource.glyphs.len();
        }

        let mut i = 0;
        while i < count {
            let glyph = resource.glyphs[i];
            let ascent = -(glyph.y_offset as i16);
            if ascent > max_ascent {
                max_ascent = ascent;
            }
            let descent = glyph.y_offset as i16 + glyph.height as i16;
            if descent > max_descent {
                max_descent = descent;
            }
            i += 1;
        }

        let y_advance = resource.y_advance as i16;
        let baseline = -max_ascent - (y_advance - max_ascent - max_descent) / 2;

        Self { resource, baseline }
    }

    /// The underlying font resource
    pub const fn resource(&self) -> &'a GfxFont<'a> {
        self.resource
    }

    /// Check whether `code` is inside the font's character range
    pub fn contains(&self, code: u8) -> bool {
        (self.resource.first..=self.resource.last).contains(&code)
            && usize::from(code - self.resource.first) < self.resource.glyphs.len()
    }

    /// Glyph record for a character code
    ///
    /// `code` must be covered by the font (see [`Font::contains`]); this is
    /// not checked beyond the slice bounds check.
    pub fn glyph(&self, code: u8) -> Glyph {
        self.resource.glyphs[usize::from(code.wrapping_sub(self.resource.first))]
    }

    /// Line advance in pixels
    pub const fn y_advance(&self) -> u8 {
        self.resource.y_advance
    }

    /// Derived baseline, negative, relative to the top of the line
    pub const fn baseline(&self) -> i16 {
        self.baseline
    }

    /// Byte `offset` of a glyph's own bitmap
    ///
    /// Offsets past [`Glyph::bitmap_len`] read into the next glyph.
    pub fn bitmap_byte(&self, glyph: &Glyph, offset: usize) -> u8 {
        self.resource.bitmap[usize::from(glyph.bitmap_offset) + offset]
    }

    /// Copy of `text` restricted to what this font can draw
    ///
    /// Keeps the first [`MAX_DISPLAYABLE_LEN`] bytes; bytes outside the
    /// font's range become a space when the font covers one and are dropped
    /// otherwise.
    pub fn printable(&self, text: &str) -> String<MAX_DISPLAYABLE_LEN> {
        let mut out = String::new();
        let space_covered = self.contains(b' ');

        for &code in text.as_bytes().iter().take(MAX_DISPLAYABLE_LEN) {
            let ch = if self.contains(code) {
                char::from(code)
            } else if space_covered {
                ' '
            } else {
                continue;
            };
            // Only ASCII is pushed and at most MAX_DISPLAYABLE_LEN of it
            let _ = out.push(ch);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn metrics(y_offset: i8, height: u8) -> Glyph {
        Glyph::new(0, 1, height, 2, 0, y_offset)
    }

    const BITMAP: [u8; 4] = [0xA5, 0x0F, 0xF0, 0x3C];

    // Ascent 10 ('a'), descent 2 ('c'), line advance 16
    const GLYPHS: [Glyph; 3] = [metrics(-10, 10), metrics(-5, 5), metrics(-3, 5)];

    const SYNTHETIC: GfxFont<'static> = GfxFont {
        bitmap: &BITMAP,
        glyphs: &GLYPHS,
        first: b'a',
        last: b'c',
        y_advance: 16,
    };

    #[test]
    fn test_baseline_centers_extents() {
        // -10 - (16 - 10 - 2) / 2
        let font = Font::new(&SYNTHETIC);
        assert_eq!(font.baseline(), -12);
    }

    #[test]
    fn test_baseline_truncates_toward_zero() {
        // Extents overflow the line: -10 - (11 - 10 - 2) / 2 = -10 - 0
        let tight = GfxFont {
            y_advance: 11,
            ..SYNTHETIC
        };
        assert_eq!(Font::new(&tight).baseline(), -10);

        // -10 - (9 - 12) / 2 = -10 - (-1)
        let tighter = GfxFont {
            y_advance: 9,
            ..SYNTHETIC
        };
        assert_eq!(Font::new(&tighter).baseline(), -9);

        // Odd slack: -10 - (17 - 12) / 2 = -10 - 2
        let loose = GfxFont {
            y_advance: 17,
            ..SYNTHETIC
        };
        assert_eq!(Font::new(&loose).baseline(), -12);
    }

    #[test]
    fn test_baseline_ignores_glyphs_outside_range() {
        // Only 'a' and 'b' are in range; 'c' carries the descent
        let partial = GfxFont {
            last: b'b',
            ..SYNTHETIC
        };
        // -10 - (16 - 10 - 0) / 2
        assert_eq!(Font::new(&partial).baseline(), -13);
    }

    #[test]
    fn test_glyph_lookup() {
        let font = Font::new(&SYNTHETIC);
        assert_eq!(font.glyph(b'a'), GLYPHS[0]);
        assert_eq!(font.glyph(b'c'), GLYPHS[2]);
        assert_eq!(font.y_advance(), 16);
    }

    #[test]
    fn test_contains() {
        let font = Font::new(&SYNTHETIC);
        assert!(font.contains(b'a'));
        assert!(font.contains(b'c'));
        assert!(!font.contains(b'd'));
        assert!(!font.contains(b'A'));
    }

    #[test]
    fn test_bitmap_byte_is_relative_to_glyph() {
        let font = Font::new(&SYNTHETIC);
        let glyph = Glyph::new(2, 4, 4, 5, 0, -4);
        assert_eq!(font.bitmap_byte(&glyph, 0), 0xF0);
        assert_eq!(font.bitmap_byte(&glyph, 1), 0x3C);
        assert_eq!(glyph.bitmap_len(), 2);
    }

    #[test]
    fn test_bitmap_len_rounds_up_whole_glyph() {
        // 5x7 = 35 bits, packed without row padding
        assert_eq!(Glyph::new(0, 5, 7, 6, 0, -7).bitmap_len(), 5);
        assert_eq!(Glyph::new(0, 0, 0, 6, 0, 0).bitmap_len(), 0);
    }

    #[test]
    fn test_printable_substitutes_uncovered() {
        let font = &crate::fonts::FONT_5X7;
        assert_eq!(font.printable("12.5").as_str(), "12.5");
        assert_eq!(font.printable("4 mV").as_str(), "4   ");
        assert_eq!(font.printable("-3°").as_str(), "-3  ");
    }

    #[test]
    fn test_printable_truncates() {
        let font = Font::new(&crate::fonts::VALUE_5X7);
        let long = "0123456789012345678901234";
        assert_eq!(font.printable(long).len(), MAX_DISPLAYABLE_LEN);
    }

    #[test]
    fn test_printable_drops_without_space() {
        let font = Font::new(&SYNTHETIC);
        assert_eq!(font.printable("a b?c").as_str(), "abc");
    }
}
