//! Bit-banged SPI master
//!
//! Write-only software SPI for boards that wire the panel to pins without
//! a hardware SPI function. Mode 3 (clock idles high, data sampled on the
//! rising edge), MSB first. Each bit drives the data line, pulls the clock
//! low, then releases it high.
//!
//! The bit rate is whatever the pin writes allow; no delays are inserted.

use pagina_hal::{OutputPin, SpiBus};

/// Software SPI error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitBangError {
    /// No input line is wired, reads are impossible
    WriteOnly,
}

/// Software SPI master over two output pins
pub struct BitBangSpi<SI, CLK> {
    si: SI,
    clk: CLK,
}

impl<SI: OutputPin, CLK: OutputPin> BitBangSpi<SI, CLK> {
    /// Create the bus with the clock at its idle level
    pub fn new(si: SI, mut clk: CLK) -> Self {
        clk.set_high();
        Self { si, clk }
    }

    /// Release the pins
    pub fn release(self) -> (SI, CLK) {
        (self.si, self.clk)
    }

    fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.si.set_state(byte & (1 << bit) != 0);
            self.clk.set_low();
            self.clk.set_high();
        }
    }
}

impl<SI: OutputPin, CLK: OutputPin> SpiBus for BitBangSpi<SI, CLK> {
    type Error = BitBangError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.shift_out(byte);
        }
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        Err(BitBangError::WriteOnly)
    }

    fn read(&mut self, _buf: &mut [u8]) -> Result<(), Self::Error> {
        Err(BitBangError::WriteOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{log, Event, Log, MockPin};

    fn bus(log: &Log) -> BitBangSpi<MockPin, MockPin> {
        BitBangSpi::new(MockPin::new("si", log), MockPin::new("clk", log))
    }

    /// Data line level at every rising clock edge
    fn sampled_bits(log: &Log) -> Vec<bool> {
        let mut data = false;
        let mut bits = Vec::new();
        for event in log.borrow().iter() {
            match *event {
                Event::Pin("si", level) => data = level,
                Event::Pin("clk", true) => bits.push(data),
                _ => {}
            }
        }
        bits
    }

    #[test]
    fn test_clock_idles_high() {
        let log = log();
        let bus = bus(&log);
        assert_eq!(*log.borrow(), [Event::Pin("clk", true)]);
        let (_, clk) = bus.release();
        assert!(clk.is_set_high());
    }

    #[test]
    fn test_msb_first() {
        let log = log();
        let mut bus = bus(&log);
        log.borrow_mut().clear();

        bus.write_byte(0xA5).unwrap();
        assert_eq!(
            sampled_bits(&log),
            [true, false, true, false, false, true, false, true]
        );
    }

    #[test]
    fn test_bit_sequence() {
        let log = log();
        let mut bus = bus(&log);
        log.borrow_mut().clear();

        bus.write(&[0x80]).unwrap();
        let events = log.borrow();
        assert_eq!(events.len(), 8 * 3);
        assert_eq!(
            events[..6],
            [
                Event::Pin("si", true),
                Event::Pin("clk", false),
                Event::Pin("clk", true),
                Event::Pin("si", false),
                Event::Pin("clk", false),
                Event::Pin("clk", true),
            ]
        );
    }

    #[test]
    fn test_multiple_bytes() {
        let log = log();
        let mut bus = bus(&log);
        log.borrow_mut().clear();

        bus.write(&[0xFF, 0x00, 0x0F]).unwrap();
        let bits = sampled_bits(&log);
        assert_eq!(bits.len(), 24);
        assert!(bits[..8].iter().all(|&b| b));
        assert!(bits[8..16].iter().all(|&b| !b));
        assert_eq!(bits[16..], [false, false, false, false, true, true, true, true]);
    }

    #[test]
    fn test_reads_rejected() {
        let log = log();
        let mut bus = bus(&log);
        let mut buf = [0u8; 2];
        assert_eq!(bus.read(&mut buf), Err(BitBangError::WriteOnly));
        assert_eq!(
            bus.transfer(&mut buf, &[1, 2]),
            Err(BitBangError::WriteOnly)
        );
    }
}
