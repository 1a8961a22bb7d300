//! Test doubles for the rendering core

use std::vec::Vec;

use crate::sink::{DisplaySink, PANEL_PAGES, PANEL_WIDTH_PX};

/// Error returned by [`RecordingSink`] once its write budget is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkError;

/// One cursor-positioned data burst
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burst {
    pub x: u16,
    pub page: u8,
    pub bytes: Vec<u8>,
}

/// Display sink that models the panel memory and records every burst
///
/// Panics on protocol misuse: writing outside a burst, nesting bursts or
/// writing past the right edge of the panel.
pub struct RecordingSink {
    pub pages: [[u8; PANEL_WIDTH_PX as usize]; PANEL_PAGES as usize],
    pub bursts: Vec<Burst>,
    pub begin_count: usize,
    pub end_count: usize,
    /// Fail every write after this many successful ones
    pub fail_after_writes: Option<usize>,
    cursor: (u16, u8),
    open: bool,
    writes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            pages: [[0; PANEL_WIDTH_PX as usize]; PANEL_PAGES as usize],
            bursts: Vec::new(),
            begin_count: 0,
            end_count: 0,
            fail_after_writes: None,
            cursor: (0, 0),
            open: false,
            writes: 0,
        }
    }

    pub fn in_burst(&self) -> bool {
        self.open
    }

    /// Panel byte at column `x` of `page`
    pub fn pixel_byte(&self, x: u16, page: u8) -> u8 {
        self.pages[usize::from(page)][usize::from(x)]
    }

    /// Panel pixel at absolute `(x, y)`
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let byte = self.pages[usize::from(y / 8)][usize::from(x)];
        byte & (1 << (y % 8)) != 0
    }
}

impl DisplaySink for RecordingSink {
    type Error = SinkError;

    fn set_cursor(&mut self, x: u16, page: u8) -> Result<(), SinkError> {
        assert!(!self.open, "cursor moved inside a burst");
        assert!(x < PANEL_WIDTH_PX && page < PANEL_PAGES, "cursor off panel");
        self.cursor = (x, page);
        Ok(())
    }

    fn begin_write(&mut self) -> Result<(), SinkError> {
        assert!(!self.open, "nested burst");
        self.open = true;
        self.begin_count += 1;
        self.bursts.push(Burst {
            x: self.cursor.0,
            page: self.cursor.1,
            bytes: Vec::new(),
        });
        Ok(())
    }

    fn write(&mut self, byte: u8) -> Result<(), SinkError> {
        assert!(self.open, "write outside a burst");
        if self.fail_after_writes.is_some_and(|limit| self.writes >= limit) {
            return Err(SinkError);
        }
        self.writes += 1;

        let (x, page) = self.cursor;
        assert!(x < PANEL_WIDTH_PX, "write past the right edge");
        self.pages[usize::from(page)][usize::from(x)] = byte;
        self.cursor.0 += 1;
        if let Some(burst) = self.bursts.last_mut() {
            burst.bytes.push(byte);
        }
        Ok(())
    }

    fn end_write(&mut self) -> Result<(), SinkError> {
        self.open = false;
        self.end_count += 1;
        Ok(())
    }
}
