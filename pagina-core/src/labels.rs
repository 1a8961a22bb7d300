//! Unit labels in native panel layout
//!
//! One byte per column per page, bit 0 the topmost pixel, stored page by
//! page. The bytes go to the panel unchanged.

use crate::config::Label;

/// `mV`, one page high
pub const MILLIVOLT_SMALL: Label<'static> = Label::new(&MILLIVOLT_SMALL_BITMAP, 11, 1);

const MILLIVOLT_SMALL_BITMAP: [u8; 11] = [
    0x7C, 0x04, 0x18, 0x04, 0x78, 0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F,
];

/// `mV`, two pages high
pub const MILLIVOLT_LARGE: Label<'static> = Label::new(&MILLIVOLT_LARGE_BITMAP, 22, 2);

const MILLIVOLT_LARGE_BITMAP: [u8; 44] = [
    0xE0, 0xE0, 0x60, 0x60, 0x80, 0x80, 0x60, 0x60, 0x80, 0x80, 0x00,
    0x00, 0xFE, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xFE,
    0x7F, 0x7F, 0x00, 0x00, 0x07, 0x07, 0x00, 0x00, 0x7F, 0x7F, 0x00,
    0x00, 0x07, 0x07, 0x18, 0x18, 0x60, 0x60, 0x18, 0x18, 0x07, 0x07,
];

/// `Hz`, one page high
pub const HERTZ_SMALL: Label<'static> = Label::new(&HERTZ_SMALL_BITMAP, 11, 1);

const HERTZ_SMALL_BITMAP: [u8; 11] = [
    0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x44, 0x64, 0x54, 0x4C, 0x44,
];
