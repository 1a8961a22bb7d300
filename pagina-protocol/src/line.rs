//! Line framing for the host protocol
//!
//! Bytes arrive one at a time from the UART. [`LineParser`] collects them
//! until `\n` and hands out the line without its terminator. An overlong
//! line is reported once and then skipped up to the next `\n`, so the
//! parser resynchronizes on the following line.

use heapless::Vec;

/// Maximum line length, terminator excluded
pub const MAX_LINE_LEN: usize = 32;

/// Line terminator
const LINE_END: u8 = b'\n';

/// Optional carriage return before the terminator
const CARRIAGE_RETURN: u8 = b'\r';

/// A complete line, terminator stripped
pub type Line = Vec<u8, MAX_LINE_LEN>;

/// Line framing error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`] and is being discarded
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Collecting bytes of a line
    Collecting,
    /// Skipping the rest of an overlong line
    Discarding,
}

/// State machine splitting a byte stream into lines
#[derive(Debug, Clone)]
pub struct LineParser {
    state: ParseState,
    buffer: Vec<u8, { MAX_LINE_LEN + 1 }>,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    /// Create a new line parser
    pub fn new() -> Self {
        Self {
            state: ParseState::Collecting,
            buffer: Vec::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::Collecting;
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(line))` when a non-empty line is complete,
    /// `Ok(None)` when more bytes are needed, or `Err` once when the
    /// current line overflows.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match self.state {
            ParseState::Collecting => {
                if byte == LINE_END {
                    if self.buffer.last() == Some(&CARRIAGE_RETURN) {
                        self.buffer.pop();
                    }
                    let line = Line::from_slice(&self.buffer).map_err(|_| LineError::Overflow);
                    self.reset();
                    return match line {
                        Ok(line) if line.is_empty() => Ok(None),
                        Ok(line) => Ok(Some(line)),
                        Err(e) => Err(e),
                    };
                }

                // Only a carriage return may take the slot past MAX_LINE_LEN
                let fits = self.buffer.len() < MAX_LINE_LEN
                    || (byte == CARRIAGE_RETURN && self.buffer.len() == MAX_LINE_LEN);
                if !fits || self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = ParseState::Discarding;
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
            ParseState::Discarding => {
                if byte == LINE_END {
                    self.reset();
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete line found, if any. Remaining bytes after
    /// a complete line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Line>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
