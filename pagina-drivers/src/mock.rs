//! Mock pins, bus and delay sharing one event log

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use pagina_hal::{OutputPin, SpiBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(&'static str, bool),
    Spi(u8),
    DelayNs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockPin {
    name: &'static str,
    high: bool,
    log: Log,
}

impl MockPin {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            high: false,
            log: log.clone(),
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.borrow_mut().push(Event::Pin(self.name, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.borrow_mut().push(Event::Pin(self.name, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

pub struct MockSpi {
    log: Log,
    /// Fail every write after this many bytes
    pub fail_after: Option<usize>,
    sent: usize,
}

impl MockSpi {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail_after: None,
            sent: 0,
        }
    }
}

impl SpiBus for MockSpi {
    type Error = BusError;

    fn write(&mut self, data: &[u8]) -> Result<(), BusError> {
        for &byte in data {
            if self.fail_after.is_some_and(|limit| self.sent >= limit) {
                return Err(BusError);
            }
            self.sent += 1;
            self.log.borrow_mut().push(Event::Spi(byte));
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), BusError> {
        self.write(write)?;
        read.fill(0);
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), BusError> {
        buf.fill(0);
        Ok(())
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }
}

/// Bytes sent on the bus, in order
pub fn spi_bytes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Spi(byte) => Some(*byte),
            _ => None,
        })
        .collect()
}
