//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use pagina_protocol::HostMessage;

/// Channel capacity for host messages
const HOST_CHANNEL_SIZE: usize = 8;

/// Decoded host messages, from the Bluetooth receiver to the display task
pub static HOST_MESSAGES: Channel<CriticalSectionRawMutex, HostMessage, HOST_CHANNEL_SIZE> =
    Channel::new();
