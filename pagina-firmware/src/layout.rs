//! Screen layout
//!
//! ```text
//! page
//!  0-2  [ main value, large font                      ][mV]
//!   3
//!   4   [ secondary value   ][Hz]
//!   5                                 zero mark
//!  6-7     [ deviation bar, 201 px centred on the zero mark ]
//! ```
//!
//! Host protocol field `n` addresses `LAYOUT[n]`.

use pagina_core::config::FieldRect;
use pagina_core::fonts::{FONT_15X21, FONT_5X7};
use pagina_core::labels::{HERTZ_SMALL, MILLIVOLT_LARGE};
use pagina_core::{layout_errors, BarField, ConfigError, Field, StringField};

/// All fields, indexed by host field number
pub static LAYOUT: [Field<'static>; 3] = [
    // Main reading
    Field::String(StringField::new(
        FieldRect::new(0, 0, 200, 3),
        &FONT_15X21,
        MILLIVOLT_LARGE,
    )),
    // Secondary reading
    Field::String(StringField::new(
        FieldRect::new(0, 4, 110, 1),
        &FONT_5X7,
        HERTZ_SMALL,
    )),
    // Deviation from the set point
    Field::Bar(BarField::at(19, 6)),
];

/// Every invalid field with its index
pub fn errors() -> impl Iterator<Item = (usize, ConfigError)> {
    layout_errors(&LAYOUT)
}
