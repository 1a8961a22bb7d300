//! RP2040-specific HAL for the display firmware
//!
//! This crate provides RP2040 implementations of the shared `pagina-hal`
//! traits on top of `embassy-rp`:
//!
//! - Push-pull outputs for the panel control lines ([`gpio::RpOutput`])
//! - Blocking hardware SPI for the panel bus ([`spi::RpSpi`])

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

pub use gpio::RpOutput;
pub use spi::{spi_config, RpSpi};

// Re-export shared traits from pagina-hal for convenience
pub use pagina_hal::{OutputPin, SpiBus};
