//! EA DOG graphic panel driver
//!
//! Driver for the 240x64 EA DOGXL-class panel (UC1611 controller) on a
//! write-only 4-wire SPI bus, mode 3, MSB first.
//!
//! Besides the bus the panel has three control lines:
//! - CS: chip select, active low, held for a whole burst
//! - CD: command/data select, low for commands, high for display data
//! - RST: reset, active low, only used during [`DogDisplay::init`]
//!
//! The controller keeps the display RAM itself, so the driver holds no
//! framebuffer: it implements [`DisplaySink`] and the field renderers
//! stream straight into the panel.

use embedded_hal::delay::DelayNs;
use pagina_core::{DisplaySink, Transaction, PANEL_PAGES, PANEL_WIDTH_PX};
use pagina_hal::{OutputPin, SpiBus};

/// Controller set-up, sent once in command mode after reset
///
/// Temperature compensation, page address control, bias, contrast, RAM
/// addressing, line rate and display enable, as specified by the panel
/// vendor for the 240x64 module.
pub const INIT_SEQUENCE: [u8; 14] = [
    0xF1, 0x3F, // last COM line 63
    0xF2, 0x00, // display start line
    0xF3, 0x3F, // display end line
    0x81, 0xB7, // contrast
    0xC0, 0x02, // mirror
    0xA3, // line rate
    0xE9, // bias 1/10
    0xA9, // display on
    0xD1, // pixel pattern
];

/// Reset pulse width
const RESET_PULSE_MS: u32 = 1;

/// Controller start-up time after reset
const RESET_RECOVERY_MS: u32 = 200;

/// Panel driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DogError<E> {
    /// SPI transport error
    Spi(E),
    /// Cursor outside the panel
    InvalidCoordinates,
}

/// Cursor command: column address MSB/LSB, page address MSB/LSB
pub const fn position_command(x: u16, page: u8) -> [u8; 4] {
    [
        0x10u8.wrapping_add((x >> 4) as u8),
        (x & 0x0F) as u8,
        0x70,
        0x60 + (page & 0x0F),
    ]
}

/// EA DOG panel driver
pub struct DogDisplay<SPI, CS, CD> {
    spi: SPI,
    cs: CS,
    cd: CD,
}

impl<SPI, CS, CD> DogDisplay<SPI, CS, CD>
where
    SPI: SpiBus,
    CS: OutputPin,
    CD: OutputPin,
{
    /// Create a driver with the panel deselected
    pub fn new(spi: SPI, mut cs: CS, cd: CD) -> Self {
        cs.set_high();
        Self { spi, cs, cd }
    }

    /// Reset and configure the panel, then clear it
    pub fn init<RST, D>(
        &mut self,
        reset: &mut RST,
        delay: &mut D,
    ) -> Result<(), DogError<SPI::Error>>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        reset.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        reset.set_high();
        delay.delay_ms(RESET_RECOVERY_MS);

        self.command(&INIT_SEQUENCE)?;
        self.clear()
    }

    /// Write zeros to every page of the panel
    pub fn clear(&mut self) -> Result<(), DogError<SPI::Error>> {
        const BLANK: [u8; PANEL_WIDTH_PX as usize] = [0; PANEL_WIDTH_PX as usize];

        for page in 0..PANEL_PAGES {
            let mut tx = Transaction::begin(self, 0, page)?;
            tx.write_all(&BLANK)?;
            tx.finish()?;
        }
        Ok(())
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, CS, CD) {
        (self.spi, self.cs, self.cd)
    }

    /// Send command bytes under their own chip select
    fn command(&mut self, bytes: &[u8]) -> Result<(), DogError<SPI::Error>> {
        self.cd.set_low();
        self.cs.set_low();
        let result = self.spi.write(bytes);
        self.cs.set_high();
        result.map_err(DogError::Spi)
    }
}

impl<SPI, CS, CD> DisplaySink for DogDisplay<SPI, CS, CD>
where
    SPI: SpiBus,
    CS: OutputPin,
    CD: OutputPin,
{
    type Error = DogError<SPI::Error>;

    fn set_cursor(&mut self, x: u16, page: u8) -> Result<(), Self::Error> {
        if x >= PANEL_WIDTH_PX || page >= PANEL_PAGES {
            return Err(DogError::InvalidCoordinates);
        }
        self.command(&position_command(x, page))
    }

    fn begin_write(&mut self) -> Result<(), Self::Error> {
        self.cd.set_high();
        self.cs.set_low();
        Ok(())
    }

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.spi.write_byte(byte).map_err(DogError::Spi)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes).map_err(DogError::Spi)
    }

    fn end_write(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high();
        Ok(())
    }
}
