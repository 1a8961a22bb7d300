//! Right-aligned text field with a unit label

use crate::config::{ConfigError, FieldRect, Label, DEFAULT_LABEL_GAP_PX};
use crate::font::Font;
use crate::raster::RasterizedString;
use crate::sink::{DisplaySink, Transaction, PAGE_HEIGHT_PX, PANEL_WIDTH_PX};

/// Text value field
///
/// The label occupies the top-right corner of the rectangle. The value is
/// drawn in the remaining width to its left, right-aligned so the text
/// ends `label_gap_px` before the label. Text wider than that area loses
/// its leftmost columns.
#[derive(Debug, Clone, Copy)]
pub struct StringField<'a> {
    /// Screen rectangle, label included
    pub rect: FieldRect,
    /// Value font
    pub font: &'a Font<'a>,
    /// Unit label
    pub label: Label<'a>,
    /// Space between value and label
    pub label_gap_px: u8,
}

impl<'a> StringField<'a> {
    /// Create a field with the default label gap
    pub const fn new(rect: FieldRect, font: &'a Font<'a>, label: Label<'a>) -> Self {
        Self {
            rect,
            font,
            label,
            label_gap_px: DEFAULT_LABEL_GAP_PX,
        }
    }

    /// Replace the label gap
    pub const fn with_label_gap(mut self, label_gap_px: u8) -> Self {
        self.label_gap_px = label_gap_px;
        self
    }

    /// Check the field and its label fit the panel and each other
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rect.validate()?;
        self.label.validate()?;

        let reserved = u16::from(self.label.width_px()) + u16::from(self.label_gap_px);
        if reserved > self.rect.width_px {
            return Err(ConfigError::LabelTooWide);
        }
        if self.label.height_pages() > self.rect.height_pages {
            return Err(ConfigError::LabelTooTall);
        }
        Ok(())
    }

    /// Width available to the value: field width minus label and gap
    pub fn value_width_px(&self) -> u16 {
        self.rect
            .width_px
            .saturating_sub(u16::from(self.label.width_px()))
            .saturating_sub(u16::from(self.label_gap_px))
    }

    /// Draw `text` over the value area
    ///
    /// Every column of the value area that lies on the panel is written, so
    /// the previous value is erased in the same pass. Characters outside the font's range are a
    /// caller error; see [`Font::printable`].
    pub fn render<S>(&self, sink: &mut S, text: &str) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        let raster = RasterizedString::new(self.font, text);
        let value_width = self.value_width_px();
        let origin = i32::from(value_width) - i32::from(raster.width());
        let visible = self.rect.visible_width(value_width);
        if visible == 0 {
            return Ok(());
        }

        for row in 0..self.rect.height_pages {
            let Some(page) = self.rect.page(row) else {
                break;
            };
            let mut tx = Transaction::begin(sink, self.rect.x_px, page)?;
            for col in 0..visible {
                tx.write(column_byte(&raster, i32::from(col) - origin, row))?;
            }
            tx.finish()?;
        }
        Ok(())
    }

    /// Draw the label bitmap in the top-right corner
    pub fn render_label<S>(&self, sink: &mut S) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        let right = u32::from(self.rect.x_px) + u32::from(self.rect.width_px);
        let label_width = u32::from(self.label.width_px()).min(u32::from(self.rect.width_px));
        let left = right - label_width;
        let Ok(x) = u16::try_from(left) else {
            return Ok(());
        };
        let visible = usize::from(PANEL_WIDTH_PX.saturating_sub(x));
        if visible == 0 {
            return Ok(());
        }

        for row in 0..self.label.height_pages() {
            let Some(page) = self.rect.page(row) else {
                break;
            };
            let bytes = self.label.page_row(row);
            let mut tx = Transaction::begin(sink, x, page)?;
            tx.write_all(&bytes[..bytes.len().min(visible)])?;
            tx.finish()?;
        }
        Ok(())
    }
}

/// Pack one page column of the rasterized string, bit 0 topmost
fn column_byte(raster: &RasterizedString<'_>, x: i32, row: u8) -> u8 {
    let top = i32::from(row) * i32::from(PAGE_HEIGHT_PX);
    (0..PAGE_HEIGHT_PX)
        .filter(|&bit| raster.is_lit(x, top + i32::from(bit)))
        .fold(0, |byte, bit| byte | (1 << bit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FONT_15X21, FONT_5X7};
    use crate::labels::{HERTZ_SMALL, MILLIVOLT_LARGE};
    use crate::testing::{RecordingSink, SinkError};

    fn small_field() -> StringField<'static> {
        StringField::new(FieldRect::new(0, 4, 110, 1), &FONT_5X7, HERTZ_SMALL)
    }

    #[test]
    fn test_value_width() {
        let field = small_field();
        assert_eq!(field.value_width_px(), 110 - 11 - 4);
        assert_eq!(field.with_label_gap(0).value_width_px(), 99);
    }

    #[test]
    fn test_validate() {
        assert_eq!(small_field().validate(), Ok(()));

        let narrow = StringField::new(FieldRect::new(0, 0, 14, 1), &FONT_5X7, HERTZ_SMALL);
        assert_eq!(narrow.validate(), Err(ConfigError::LabelTooWide));

        let short = StringField::new(FieldRect::new(0, 0, 100, 1), &FONT_15X21, MILLIVOLT_LARGE);
        assert_eq!(short.validate(), Err(ConfigError::LabelTooTall));

        let off_panel = StringField::new(FieldRect::new(200, 0, 100, 1), &FONT_5X7, HERTZ_SMALL);
        assert_eq!(off_panel.validate(), Err(ConfigError::OutsidePanel));
    }

    #[test]
    fn test_render_one_burst_per_row() {
        let field = StringField::new(FieldRect::new(5, 1, 120, 3), &FONT_15X21, MILLIVOLT_LARGE);
        let mut sink = RecordingSink::new();
        field.render(&mut sink, "1.5").unwrap();

        assert_eq!(sink.bursts.len(), 3);
        for (row, burst) in sink.bursts.iter().enumerate() {
            assert_eq!(burst.x, 5);
            assert_eq!(usize::from(burst.page), 1 + row);
            assert_eq!(burst.bytes.len(), usize::from(field.value_width_px()));
        }
        assert!(!sink.in_burst());
    }

    #[test]
    fn test_render_matches_rasterizer() {
        let field = small_field();
        let mut sink = RecordingSink::new();
        field.render(&mut sink, "-12.5").unwrap();

        let raster = RasterizedString::new(&FONT_5X7, "-12.5");
        let origin = i32::from(field.value_width_px()) - i32::from(raster.width());
        let top = u16::from(field.rect.y_page) * 8;

        for col in 0..field.value_width_px() {
            for y in 0..8u16 {
                let expected = raster.is_lit(i32::from(col) - origin, i32::from(y));
                assert_eq!(sink.pixel(col, top + y), expected, "col {col} y {y}");
            }
        }
    }

    #[test]
    fn test_text_is_right_aligned() {
        let field = small_field();
        let mut sink = RecordingSink::new();
        field.render(&mut sink, "8").unwrap();

        // '8' is 5 px wide plus a 1 px gap; its last inked column sits
        // two columns before the end of the value area
        let end = field.value_width_px();
        let inked: Vec<u16> = (0..end).filter(|&x| sink.pixel_byte(x, 4) != 0).collect();
        assert_eq!(inked.first(), Some(&(end - 6)));
        assert_eq!(inked.last(), Some(&(end - 2)));
    }

    #[test]
    fn test_bit_zero_is_top_pixel() {
        let field = small_field();
        let mut sink = RecordingSink::new();
        field.render(&mut sink, "-").unwrap();

        // The minus bar sits on row 3 of the 5x7 cell
        let end = field.value_width_px();
        assert_eq!(sink.pixel_byte(end - 4, 4), 1 << 3);
    }

    #[test]
    fn test_render_erases_previous_value() {
        let field = small_field();
        let mut sink = RecordingSink::new();
        field.render(&mut sink, "888888").unwrap();
        field.render(&mut sink, " ").unwrap();

        assert!((0..field.value_width_px()).all(|x| sink.pixel_byte(x, 4) == 0));
    }

    #[test]
    fn test_overlong_text_is_clipped_left() {
        let field = StringField::new(FieldRect::new(0, 0, 30, 1), &FONT_5X7, HERTZ_SMALL);
        let mut sink = RecordingSink::new();
        field.render(&mut sink, "12345678").unwrap();
        assert_eq!(sink.bursts[0].bytes.len(), 15);
    }

    #[test]
    fn test_render_label() {
        let field = small_field();
        let mut sink = RecordingSink::new();
        field.render_label(&mut sink).unwrap();

        assert_eq!(sink.bursts.len(), 1);
        assert_eq!(sink.bursts[0].x, 110 - 11);
        assert_eq!(sink.bursts[0].page, 4);
        assert_eq!(sink.bursts[0].bytes, HERTZ_SMALL.page_row(0));
    }

    #[test]
    fn test_render_two_page_label() {
        let field = StringField::new(FieldRect::new(0, 0, 200, 3), &FONT_15X21, MILLIVOLT_LARGE);
        let mut sink = RecordingSink::new();
        field.render_label(&mut sink).unwrap();

        assert_eq!(sink.bursts.len(), 2);
        assert_eq!(sink.bursts[1].x, 178);
        assert_eq!(sink.bursts[1].page, 1);
        assert_eq!(sink.bursts[1].bytes, MILLIVOLT_LARGE.page_row(1));
    }

    #[test]
    fn test_render_clips_at_right_panel_edge() {
        let field = StringField::new(FieldRect::new(200, 4, 100, 1), &FONT_5X7, HERTZ_SMALL);
        assert_eq!(field.validate(), Err(ConfigError::OutsidePanel));

        let mut sink = RecordingSink::new();
        field.render(&mut sink, "1").unwrap();
        field.render_label(&mut sink).unwrap();

        // Value area is 85 px but only 40 columns remain; the label is off panel
        assert_eq!(sink.bursts.len(), 1);
        assert_eq!(sink.bursts[0].x, 200);
        assert_eq!(sink.bursts[0].bytes.len(), 40);
    }

    #[test]
    fn test_render_clips_label_at_right_panel_edge() {
        let field = StringField::new(FieldRect::new(200, 0, 45, 2), &FONT_15X21, MILLIVOLT_LARGE);
        let mut sink = RecordingSink::new();
        field.render_label(&mut sink).unwrap();

        // Label starts at 223, 17 of its 22 columns fit
        assert_eq!(sink.bursts.len(), 2);
        assert_eq!(sink.bursts[0].x, 223);
        assert_eq!(sink.bursts[0].bytes, MILLIVOLT_LARGE.page_row(0)[..17]);
    }

    #[test]
    fn test_render_clips_at_bottom_panel_edge() {
        let field = StringField::new(FieldRect::new(0, 6, 200, 3), &FONT_15X21, MILLIVOLT_LARGE);
        let mut sink = RecordingSink::new();
        field.render(&mut sink, "12").unwrap();
        field.render_label(&mut sink).unwrap();

        let pages: Vec<u8> = sink.bursts.iter().map(|b| b.page).collect();
        assert_eq!(pages, [6, 7, 6, 7]);
        assert!(!sink.in_burst());
    }

    #[test]
    fn test_render_far_off_panel_writes_nothing() {
        let right = FieldRect::new(u16::MAX, 0, u16::MAX, 1);
        let below = FieldRect::new(0, 250, 110, 10);
        let mut sink = RecordingSink::new();
        for rect in [right, below] {
            let field = StringField::new(rect, &FONT_5X7, HERTZ_SMALL);
            field.render(&mut sink, "42").unwrap();
            field.render_label(&mut sink).unwrap();
        }
        assert!(sink.bursts.is_empty());
    }

    #[test]
    fn test_sink_error_closes_burst() {
        let field = small_field();
        let mut sink = RecordingSink::new();
        sink.fail_after_writes = Some(10);

        assert_eq!(field.render(&mut sink, "1"), Err(SinkError));
        assert!(!sink.in_burst());
        assert_eq!(sink.begin_count, sink.end_count);
    }
}
