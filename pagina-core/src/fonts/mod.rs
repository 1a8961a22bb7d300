//! Compiled-in value fonts
//!
//! Both fonts cover `' '..=':'` with glyphs for the digits, `+ , - . / : %`
//! and space; the other codes in the range are blank.

mod value_15x21;
mod value_5x7;

use crate::font::Font;

pub use value_15x21::VALUE_15X21;
pub use value_5x7::VALUE_5X7;

/// Small value font, one page line advance
pub static FONT_5X7: Font<'static> = Font::new(&VALUE_5X7);

/// Large value font, three page line advance
pub static FONT_15X21: Font<'static> = Font::new(&VALUE_15X21);
