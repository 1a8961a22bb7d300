//! Board-agnostic rendering core for the instrument display
//!
//! This crate contains everything between a value string and the column
//! bytes the panel receives, with no dependency on a specific transport:
//!
//! - Glyph table over compiled-in GFX-style fonts ([`font`])
//! - Point-query string rasterizer ([`raster`])
//! - String and bar-graph field renderers ([`field`])
//! - The display sink interface the renderers write through ([`sink`])
//! - Field geometry and layout validation ([`config`])
//!
//! Nothing here allocates: a render streams each column byte to the sink
//! as soon as it is computed, so no string bitmap or framebuffer exists.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bits;
pub mod config;
pub mod field;
pub mod font;
pub mod fonts;
pub mod labels;
pub mod raster;
pub mod sink;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, FieldRect, Label};
pub use field::{layout_errors, BarField, Field, StringField};
pub use font::{Font, GfxFont, Glyph};
pub use raster::{RasterizedString, MAX_DISPLAYABLE_LEN};
pub use sink::{DisplaySink, Transaction, PAGE_HEIGHT_PX, PANEL_PAGES, PANEL_WIDTH_PX};
