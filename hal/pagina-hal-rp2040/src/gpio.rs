//! GPIO outputs for RP2040

use embassy_rp::gpio::Output;
use pagina_hal::OutputPin;

/// Push-pull output pin
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap a configured embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> From<Output<'d>> for RpOutput<'d> {
    fn from(pin: Output<'d>) -> Self {
        Self::new(pin)
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
