//! Zero-centred bar graph field
//!
//! The bar grows right from the middle column for positive values and left
//! for negative ones, one pixel per unit, clipped to the field. Inside the
//! bar, tick bands every [`ZERO_BAND_PERIOD`] pixels from the middle are
//! drawn solid over the full field height; between ticks the bar is solid
//! only in the lower half of the field, so it tapers towards the top.
//!
//! With the zero extension enabled, the page row above the field carries a
//! short mark over the middle column. It is widest at zero and narrows as
//! the value moves away, so small values around zero stay distinguishable.

use crate::bits::fill_bits_from_msb;
use crate::config::{ConfigError, FieldRect, DEFAULT_BAR_HEIGHT_PAGES, DEFAULT_BAR_WIDTH_PX};
use crate::sink::{DisplaySink, Transaction, PAGE_HEIGHT_PX, PANEL_PAGES, PANEL_WIDTH_PX};

/// Half width of a tick band and of the zero mark, in pixels
pub const ZERO_BAND_HALF_WIDTH: i32 = 2;

/// Distance between tick bands, in pixels
pub const ZERO_BAND_PERIOD: u32 = 20;

/// Bar graph field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarField {
    /// Screen rectangle, zero extension row excluded
    pub rect: FieldRect,
    /// Draw the zero mark on the page above the field
    pub zero_extension: bool,
}

impl BarField {
    /// Create a bar field
    pub const fn new(rect: FieldRect, zero_extension: bool) -> Self {
        Self {
            rect,
            zero_extension,
        }
    }

    /// Default-sized bar field with the zero extension, top-left at the
    /// given position
    pub const fn at(x_px: u16, y_page: u8) -> Self {
        Self::new(
            FieldRect::new(x_px, y_page, DEFAULT_BAR_WIDTH_PX, DEFAULT_BAR_HEIGHT_PAGES),
            true,
        )
    }

    /// Check the field, and the zero extension row if enabled, fit the panel
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rect.validate()?;

        if self.zero_extension {
            let mark_left = i32::from(self.rect.x_px) + self.middle_x() - ZERO_BAND_HALF_WIDTH;
            let mark_right = mark_left + 2 * ZERO_BAND_HALF_WIDTH;
            if self.rect.y_page == 0 || mark_left < 0 || mark_right >= i32::from(PANEL_WIDTH_PX) {
                return Err(ConfigError::ZeroExtensionOffPanel);
            }
        }
        Ok(())
    }

    /// Column of the zero point, relative to the field's left edge
    pub fn middle_x(&self) -> i32 {
        (i32::from(self.rect.width_px) - 1) / 2
    }

    /// Inclusive column range covered by the bar for `value`
    ///
    /// Always contains the middle column; the far end is clipped to
    /// `0..width`.
    pub fn bar_span(&self, value: i16) -> (i32, i32) {
        let middle = self.middle_x();
        let tip = middle + i32::from(value);
        if value < 0 {
            (tip.max(0), middle)
        } else {
            (middle, tip.min(i32::from(self.rect.width_px) - 1))
        }
    }

    /// Fill pattern of bar columns between tick bands on page row `row`
    ///
    /// Rows in the lower half are solid, the row straddling the middle of
    /// an odd-height field is solid in its lower half, the rest are empty.
    pub fn row_fill(&self, row: u8) -> u8 {
        let twice = 2 * u16::from(row) + 1;
        let height = u16::from(self.rect.height_pages);
        if twice > height {
            0xFF
        } else if twice == height {
            fill_bits_from_msb(PAGE_HEIGHT_PX / 2)
        } else {
            0x00
        }
    }

    /// Draw `text` parsed as a signed integer, see [`parse_value`]
    pub fn render<S>(&self, sink: &mut S, text: &str) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        self.render_value(sink, parse_value(text))
    }

    /// Draw `value`
    ///
    /// Every column of the field that lies on the panel is written. The
    /// zero extension is skipped when it would not fit the panel.
    pub fn render_value<S>(&self, sink: &mut S, value: i16) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        let span = self.bar_span(value);
        let middle = self.middle_x();
        let visible = self.rect.visible_width(self.rect.width_px);

        for row in 0..self.rect.height_pages {
            if visible == 0 {
                break;
            }
            let Some(page) = self.rect.page(row) else {
                break;
            };
            let fill = self.row_fill(row);
            let mut tx = Transaction::begin(sink, self.rect.x_px, page)?;
            for x in 0..i32::from(visible) {
                tx.write(column_byte(x, span, middle, fill))?;
            }
            tx.finish()?;
        }

        if self.zero_extension {
            self.render_zero_extension(sink, value)?;
        }
        Ok(())
    }

    fn render_zero_extension<S>(&self, sink: &mut S, value: i16) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        let Some(page) = self.rect.y_page.checked_sub(1).filter(|&page| page < PANEL_PAGES) else {
            return Ok(());
        };
        let left = i32::from(self.rect.x_px) + self.middle_x() - ZERO_BAND_HALF_WIDTH;
        let Ok(x) = u16::try_from(left) else {
            return Ok(());
        };
        if i32::from(x) + 2 * ZERO_BAND_HALF_WIDTH >= i32::from(PANEL_WIDTH_PX) {
            return Ok(());
        }

        let (start, end) = zero_extension_span(value);
        let mut tx = Transaction::begin(sink, x, page)?;
        for offset in -ZERO_BAND_HALF_WIDTH..=ZERO_BAND_HALF_WIDTH {
            let byte = if (start..=end).contains(&offset) { 0xFF } else { 0x00 };
            tx.write(byte)?;
        }
        tx.finish()
    }
}

/// Column byte of the bar at field column `x`
fn column_byte(x: i32, (start, end): (i32, i32), middle: i32, fill: u8) -> u8 {
    if x < start || x > end {
        return 0x00;
    }
    let phase = (x - middle).unsigned_abs() % ZERO_BAND_PERIOD;
    let half = ZERO_BAND_HALF_WIDTH.unsigned_abs();
    if phase <= half || phase >= ZERO_BAND_PERIOD - half {
        0xFF
    } else {
        fill
    }
}

/// Inclusive span of the zero mark, relative to the middle column
///
/// `[-2, 2]` for values near zero, shrinking to `[0, 2]` for large positive
/// values and `[-2, 0]` for large negative ones.
pub fn zero_extension_span(value: i16) -> (i32, i32) {
    let value = i32::from(value);
    let reach = 2 * ZERO_BAND_HALF_WIDTH;
    let start = (value - reach).clamp(-ZERO_BAND_HALF_WIDTH, 0);
    let end = (value + reach).clamp(0, ZERO_BAND_HALF_WIDTH);
    (start, end)
}

/// Parse a bar value leniently
///
/// Leading ASCII whitespace is skipped, then an optional sign and decimal
/// digits up to the first other byte. No digits gives 0; out-of-range
/// values saturate.
pub fn parse_value(text: &str) -> i16 {
    let mut bytes = text
        .as_bytes()
        .iter()
        .copied()
        .skip_while(u8::is_ascii_whitespace)
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut magnitude: i32 = 0;
    for byte in bytes.take_while(u8::is_ascii_digit) {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i32::from(byte - b'0'));
    }

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
