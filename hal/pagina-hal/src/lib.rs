//! Pagina Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display driver is written
//! against, so the same driver runs on hardware SPI or on bit-banged GPIOs
//! and can be exercised on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pagina-drivers (DOG panel, soft SPI)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pagina-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  pagina-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (chip select, command/data, reset)
//! - [`spi::SpiBus`] - SPI master operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::SpiBus;
