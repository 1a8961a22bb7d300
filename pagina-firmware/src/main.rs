//! Pagina - Instrument Display Firmware
//!
//! Main firmware binary for an RP2040 driving a 240x64 EA DOG panel.
//! A host streams field values over a Bluetooth serial link; each value is
//! rendered straight into the panel's page memory.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, Config as UartConfig};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pagina_drivers::DogDisplay;
use pagina_hal::spi::SpiConfig;
use pagina_hal_rp2040::{spi_config, RpOutput, RpSpi};

mod channels;
mod layout;
mod tasks;

/// Baud rate of the Bluetooth serial module
const BLUETOOTH_BAUD: u32 = 9600;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cell for the UART receive buffer (must live forever)
static RX_BUF: StaticCell<[u8; 128]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pagina firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // A bad field still renders clipped, so only report it
    for (index, e) in layout::errors() {
        error!("Layout field {} invalid: {:?}", index, e);
    }

    // Panel: SPI0 TX only (CLK GPIO18, MOSI GPIO19), CS GPIO17, CD GPIO20, RST GPIO21
    let spi = Spi::new_blocking_txonly(
        p.SPI0,
        p.PIN_18,
        p.PIN_19,
        spi_config(&SpiConfig::dog_panel()),
    );
    let cs = RpOutput::new(Output::new(p.PIN_17, Level::High));
    let cd = RpOutput::new(Output::new(p.PIN_20, Level::Low));
    let reset = RpOutput::new(Output::new(p.PIN_21, Level::High));
    let panel = DogDisplay::new(RpSpi::new(spi), cs, cd);

    // Bluetooth module on UART0 RX (GPIO1)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BLUETOOTH_BAUD;
    let rx_buf = RX_BUF.init([0u8; 128]);
    let rx = BufferedUartRx::new(p.UART0, Irqs, p.PIN_1, rx_buf, uart_config);

    info!("Spawning tasks...");
    spawner.spawn(tasks::display_task(panel, reset)).unwrap();
    spawner.spawn(tasks::bluetooth_rx_task(rx)).unwrap();

    info!("Pagina firmware running");
}
