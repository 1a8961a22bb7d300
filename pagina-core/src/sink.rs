//! Display sink interface
//!
//! The renderers never touch the transport. They position the panel's
//! write cursor and stream column bytes through a [`DisplaySink`]; the
//! driver behind it owns chip select, command/data mode and the bus.
//!
//! # Byte layout
//!
//! Each byte covers 8 vertically adjacent pixels of one page: bit 0 is the
//! topmost pixel, bit 7 the bottommost. Successive bytes of a burst fill
//! successive columns left to right.

/// Panel width in pixels
pub const PANEL_WIDTH_PX: u16 = 240;

/// Panel height in pages
pub const PANEL_PAGES: u8 = 8;

/// Pixels per page
pub const PAGE_HEIGHT_PX: u8 = 8;

/// Byte sink for a page-addressed panel
///
/// A burst is `set_cursor`, `begin_write`, any number of `write`s, then
/// `end_write`. Bursts must not interleave; use [`Transaction`] so the
/// burst is closed on every exit path.
pub trait DisplaySink {
    /// Transport error
    type Error;

    /// Move the write cursor to column `x` of page `page`
    fn set_cursor(&mut self, x: u16, page: u8) -> Result<(), Self::Error>;

    /// Start a data burst at the cursor
    fn begin_write(&mut self) -> Result<(), Self::Error>;

    /// Write one column byte and advance the cursor
    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a run of column bytes
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.write(byte)?;
        }
        Ok(())
    }

    /// End the data burst and release the bus
    fn end_write(&mut self) -> Result<(), Self::Error>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    type Error = T::Error;

    fn set_cursor(&mut self, x: u16, page: u8) -> Result<(), Self::Error> {
        (**self).set_cursor(x, page)
    }

    fn begin_write(&mut self) -> Result<(), Self::Error> {
        (**self).begin_write()
    }

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write(byte)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(bytes)
    }

    fn end_write(&mut self) -> Result<(), Self::Error> {
        (**self).end_write()
    }
}

/// Scoped data burst
///
/// Holds the sink exclusively for the duration of one burst. The burst is
/// ended by [`finish`](Self::finish), or by `Drop` when the guard goes out
/// of scope early (for example on a `?` return), in which case an error
/// from `end_write` is dropped since the earlier error is the one returned.
pub struct Transaction<'a, S: DisplaySink + ?Sized> {
    sink: &'a mut S,
    open: bool,
}

impl<'a, S: DisplaySink + ?Sized> Transaction<'a, S> {
    /// Position the cursor and begin a burst
    pub fn begin(sink: &'a mut S, x: u16, page: u8) -> Result<Self, S::Error> {
        sink.set_cursor(x, page)?;
        if let Err(e) = sink.begin_write() {
            let _ = sink.end_write();
            return Err(e);
        }
        Ok(Self { sink, open: true })
    }

    /// Write one column byte
    pub fn write(&mut self, byte: u8) -> Result<(), S::Error> {
        self.sink.write(byte)
    }

    /// Write a run of column bytes
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), S::Error> {
        self.sink.write_all(bytes)
    }

    /// End the burst, reporting the sink's result
    pub fn finish(mut self) -> Result<(), S::Error> {
        self.open = false;
        self.sink.end_write()
    }
}

impl<S: DisplaySink + ?Sized> Drop for Transaction<'_, S> {
    fn drop(&mut self) {
        if self.open {
            let _ = self.sink.end_write();
        }
    }
}
