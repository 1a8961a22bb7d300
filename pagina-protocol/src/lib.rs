//! Host line protocol
//!
//! The instrument pushes field values to the display over a serial link
//! (a Bluetooth SPP module on the display board). Every message is one
//! line of ASCII text:
//!
//! ```text
//! F<n>=<value>\n     set field n (0-15) to value (at most 20 bytes)
//! CLR\n              clear the panel and redraw the labels
//! ```
//!
//! A `\r` before the `\n` is ignored, so both line ending styles work.
//! Lines longer than [`MAX_LINE_LEN`] are dropped whole.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod line;
pub mod messages;

pub use line::{Line, LineError, LineParser, MAX_LINE_LEN};
pub use messages::{HostMessage, MessageError, MAX_FIELDS, MAX_VALUE_LEN};
