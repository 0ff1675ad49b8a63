//! Tagged transcoding units.
//!
//! Encode and decode first produce a sequence of units; the `??…??` escape
//! convention and the `/` delimiters only appear when those units are
//! rendered to wire text.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::wire::{DELIMITER, ESCAPE_CLOSE, ESCAPE_OPEN, SEPARATOR};

/// One step of an encoded stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodedUnit<'a> {
    /// Code string of a known character
    Code(&'a str),
    /// Character with no table entry, passed through escaped
    Unknown(char),
    /// Word separator
    WordBreak,
}

/// One step of decoded text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedUnit {
    /// Character whose code matched the table
    Char(char),
    /// Code span with no table entry, passed through escaped
    Unknown(String),
    /// Word separator
    WordBreak,
}

impl fmt::Display for EncodedUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}{DELIMITER}"),
            Self::Unknown(ch) => write!(f, "{ESCAPE_OPEN}{ch}{ESCAPE_CLOSE}{DELIMITER}"),
            Self::WordBreak => f.write_char(DELIMITER),
        }
    }
}

impl fmt::Display for DecodedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => f.write_char(*ch),
            Self::Unknown(span) => write!(f, "{ESCAPE_OPEN}{span}{ESCAPE_CLOSE}"),
            Self::WordBreak => f.write_char(SEPARATOR),
        }
    }
}

/// Render encoded units to wire text.
#[must_use]
pub fn render_encoded(units: &[EncodedUnit<'_>]) -> String {
    render(units)
}

/// Render decoded units to plain text.
#[must_use]
pub fn render_decoded(units: &[DecodedUnit]) -> String {
    render(units)
}

fn render<T: fmt::Display>(units: &[T]) -> String {
    let mut out = String::new();
    for unit in units {
        // Writing to a String cannot fail
        let _ = write!(out, "{unit}");
    }
    out
}
