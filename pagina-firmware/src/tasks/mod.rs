//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod bluetooth_rx;
pub mod display;

pub use bluetooth_rx::bluetooth_rx_task;
pub use display::{display_task, Panel};
