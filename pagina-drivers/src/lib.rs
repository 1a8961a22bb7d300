//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! pagina-core and pagina-hal:
//!
//! - EA DOG page-addressed panel driver, a [`DisplaySink`](pagina_core::DisplaySink)
//! - Bit-banged SPI master for panels wired to arbitrary GPIOs

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bitbang;
pub mod dog;

#[cfg(test)]
mod mock;

pub use bitbang::{BitBangError, BitBangSpi};
pub use dog::{position_command, DogDisplay, DogError, INIT_SEQUENCE};
