//! Bluetooth UART receive task
//!
//! Receives protocol lines from the Bluetooth serial module and forwards
//! decoded messages to the display task.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use pagina_protocol::{HostMessage, LineParser};

use crate::channels::HOST_MESSAGES;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Bluetooth RX task - receives and parses host lines
#[embassy_executor::task]
pub async fn bluetooth_rx_task(mut rx: BufferedUartRx) {
    info!("Bluetooth RX task started");

    let mut parser = LineParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(line)) => match HostMessage::parse(&line) {
                            Ok(message) => forward(message),
                            Err(e) => {
                                warn!("Bad host line {=[u8]:a}: {:?}", &line[..], e);
                            }
                        },
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Line parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Hand a message to the display task, dropping it if the queue is full
fn forward(message: HostMessage) {
    if HOST_MESSAGES.try_send(message).is_err() {
        warn!("Host message channel full, dropping message");
    }
}
