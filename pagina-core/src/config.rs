//! Field geometry and layout validation
//!
//! The screen layout is compiled in. Every type here is `const`
//! constructible so a layout can live in a `static`, and every type has a
//! `validate` the firmware runs once at boot before drawing anything.

use crate::sink::{PANEL_PAGES, PANEL_WIDTH_PX};

/// Default horizontal distance between a value and its label
pub const DEFAULT_LABEL_GAP_PX: u8 = 4;

/// Default bar field width
pub const DEFAULT_BAR_WIDTH_PX: u16 = 201;

/// Default bar field height
pub const DEFAULT_BAR_HEIGHT_PAGES: u8 = 2;

/// Layout error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Field has zero width or zero height
    EmptyField,
    /// Field extends past the panel edge
    OutsidePanel,
    /// Label bitmap length is not width times height
    LabelBitmapSize,
    /// Label plus gap does not fit the field width
    LabelTooWide,
    /// Label is taller than the field
    LabelTooTall,
    /// Zero extension row would be above page 0
    ZeroExtensionOffPanel,
}

/// Screen rectangle of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldRect {
    /// Left edge in pixels
    pub x_px: u16,
    /// Top edge in pages
    pub y_page: u8,
    /// Width in pixels
    pub width_px: u16,
    /// Height in pages
    pub height_pages: u8,
}

impl FieldRect {
    /// Create a field rectangle
    pub const fn new(x_px: u16, y_page: u8, width_px: u16, height_pages: u8) -> Self {
        Self {
            x_px,
            y_page,
            width_px,
            height_pages,
        }
    }

    /// Check the rectangle is non-empty and inside the panel
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width_px == 0 || self.height_pages == 0 {
            return Err(ConfigError::EmptyField);
        }
        let right = u32::from(self.x_px) + u32::from(self.width_px);
        let bottom = u16::from(self.y_page) + u16::from(self.height_pages);
        if right > u32::from(PANEL_WIDTH_PX) || bottom > u16::from(PANEL_PAGES) {
            return Err(ConfigError::OutsidePanel);
        }
        Ok(())
    }

    /// Number of columns from `x_px` that land on the panel, at most `width`
    pub fn visible_width(&self, width: u16) -> u16 {
        PANEL_WIDTH_PX.saturating_sub(self.x_px).min(width)
    }

    /// Panel page of field row `row`, or `None` when it is off the panel
    pub fn page(&self, row: u8) -> Option<u8> {
        self.y_page
            .checked_add(row)
            .filter(|&page| page < PANEL_PAGES)
    }
}

/// Pre-packed label bitmap
///
/// Stored in native panel layout: `height_pages` rows of `width_px` bytes,
/// top row first, each byte one column of one page with bit 0 on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Label<'a> {
    bitmap: &'a [u8],
    width_px: u8,
    height_pages: u8,
}

impl<'a> Label<'a> {
    /// Create a label over a packed bitmap
    pub const fn new(bitmap: &'a [u8], width_px: u8, height_pages: u8) -> Self {
        Self {
            bitmap,
            width_px,
            height_pages,
        }
    }

    /// Label that draws nothing and reserves no space
    pub const fn empty() -> Self {
        Self::new(&[], 0, 0)
    }

    /// Width in pixels
    pub const fn width_px(&self) -> u8 {
        self.width_px
    }

    /// Height in pages
    pub const fn height_pages(&self) -> u8 {
        self.height_pages
    }

    /// Column bytes of one page row of the label
    ///
    /// Rows past the bitmap come back short or empty.
    pub fn page_row(&self, page: u8) -> &'a [u8] {
        let width = usize::from(self.width_px);
        let start = usize::from(page) * width;
        let end = (start + width).min(self.bitmap.len());
        self.bitmap.get(start..end).unwrap_or(&[])
    }

    /// Check the bitmap length matches the declared size
    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected = usize::from(self.width_px) * usize::from(self.height_pages);
        if self.bitmap.len() != expected {
            return Err(ConfigError::LabelBitmapSize);
        }
        Ok(())
    }
}
