//! Field renderers
//!
//! A field owns a fixed screen rectangle and turns one input string into
//! column bytes for that rectangle, one page row per sink burst. Fields
//! keep no state between renders.

pub mod bar;
pub mod string;

pub use bar::{parse_value, zero_extension_span, BarField, ZERO_BAND_HALF_WIDTH, ZERO_BAND_PERIOD};
pub use string::StringField;

use crate::config::ConfigError;
use crate::sink::DisplaySink;

/// Any field of a screen layout
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    /// Text value with a unit label
    String(StringField<'a>),
    /// Zero-centred bar graph
    Bar(BarField),
}

impl Field<'_> {
    /// Check the field fits the panel
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Field::String(field) => field.validate(),
            Field::Bar(field) => field.validate(),
        }
    }

    /// Draw a value received from outside
    ///
    /// Text fields first replace characters their font cannot draw, so
    /// any input is safe to pass.
    pub fn render<S>(&self, sink: &mut S, text: &str) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        match self {
            Field::String(field) => field.render(sink, &field.font.printable(text)),
            Field::Bar(field) => field.render(sink, text),
        }
    }

    /// Draw the static parts of the field
    pub fn render_label<S>(&self, sink: &mut S) -> Result<(), S::Error>
    where
        S: DisplaySink + ?Sized,
    {
        match self {
            Field::String(field) => field.render_label(sink),
            Field::Bar(_) => Ok(()),
        }
    }
}

/// Every invalid field of a layout with its index
///
/// Unlike a `?` chain over [`Field::validate`], this keeps going past the
/// first bad field so all of them can be reported.
pub fn layout_errors<'f>(
    fields: &'f [Field<'f>],
) -> impl Iterator<Item = (usize, ConfigError)> + 'f {
    fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| field.validate().err().map(|e| (index, e)))
}
