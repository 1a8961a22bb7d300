//! Message types for the host protocol

use heapless::String;

/// Number of addressable fields
pub const MAX_FIELDS: u8 = 16;

/// Maximum value length in bytes
///
/// Matches the longest string a field can display.
pub const MAX_VALUE_LEN: usize = 20;

/// Clear command
const CMD_CLEAR: &[u8] = b"CLR";

/// Field assignment prefix
const FIELD_PREFIX: u8 = b'F';

/// Field assignment separator
const FIELD_SEPARATOR: u8 = b'=';

/// Message decoding error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Line matches no command
    UnknownCommand,
    /// Field index missing, not decimal or not below [`MAX_FIELDS`]
    InvalidField,
    /// Value longer than [`MAX_VALUE_LEN`]
    ValueTooLong,
    /// Value is not valid UTF-8
    InvalidValue,
}

/// Messages from the host to the display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostMessage {
    /// Show a new value in one field
    SetField {
        field: u8,
        value: String<MAX_VALUE_LEN>,
    },
    /// Clear the panel and redraw the labels
    Clear,
}

impl HostMessage {
    /// Decode one line, terminator already stripped
    pub fn parse(line: &[u8]) -> Result<Self, MessageError> {
        if line == CMD_CLEAR {
            return Ok(HostMessage::Clear);
        }

        let Some(rest) = line.strip_prefix(&[FIELD_PREFIX]) else {
            return Err(MessageError::UnknownCommand);
        };
        let Some(separator) = rest.iter().position(|&b| b == FIELD_SEPARATOR) else {
            return Err(MessageError::UnknownCommand);
        };

        let field = parse_field_index(&rest[..separator])?;
        let value = &rest[separator + 1..];
        if value.len() > MAX_VALUE_LEN {
            return Err(MessageError::ValueTooLong);
        }
        let value = core::str::from_utf8(value).map_err(|_| MessageError::InvalidValue)?;

        let mut owned = String::new();
        owned
            .push_str(value)
            .map_err(|_| MessageError::ValueTooLong)?;

        Ok(HostMessage::SetField {
            field,
            value: owned,
        })
    }
}

/// Parse a one or two digit decimal field index
fn parse_field_index(digits: &[u8]) -> Result<u8, MessageError> {
    if digits.is_empty() || digits.len() > 2 || !digits.iter().all(u8::is_ascii_digit) {
        return Err(MessageError::InvalidField);
    }
    let index = digits.iter().fold(0u8, |acc, &d| acc * 10 + (d - b'0'));
    if index >= MAX_FIELDS {
        return Err(MessageError::InvalidField);
    }
    Ok(index)
}
