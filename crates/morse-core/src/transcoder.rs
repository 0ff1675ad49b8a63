//! Text ↔ code transcoder.
//!
//! # Wire behavior
//!
//! Encode closes every code with `/` and turns a space into one extra `/`,
//! so words are separated by `//`. Decode splits on `/`, and on a `/` that
//! directly follows another `/` it emits a space.
//!
//! An empty code between two delimiters has no table entry, so by default
//! decode escapes it as `????` right before the space. [`EmptyCode::Skip`]
//! turns that off for callers that want `decode(encode(text)) == text`.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use log::{debug, trace};

use crate::error::TableError;
use crate::table::TableSet;
use crate::unit::{render_decoded, render_encoded, DecodedUnit, EncodedUnit};
use crate::wire::{DELIMITER, NEWLINE, SEPARATOR};

/// Handling of an empty code between two delimiters during decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyCode {
    /// Escape it like any other unmatched code (`????`)
    #[default]
    Escape,
    /// Emit nothing for it
    Skip,
}

/// Encoder/decoder bound to one active table.
#[derive(Clone, Debug, Default)]
pub struct Transcoder {
    table: TableSet,
}

impl Transcoder {
    /// Create a transcoder using `table`.
    #[must_use]
    pub fn new(table: TableSet) -> Self {
        Self { table }
    }

    /// Active table.
    #[must_use]
    pub fn table(&self) -> &TableSet {
        &self.table
    }

    /// Build a table from `entries` and make it active.
    ///
    /// # Errors
    ///
    /// Returns the validation error and keeps the current table when the
    /// entries do not form a valid table.
    pub fn set_table<I, K, V>(&mut self, entries: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let table = TableSet::from_entries(entries)?;
        self.replace_table(table);
        Ok(())
    }

    /// Make an already built table active, returning the previous one.
    pub fn replace_table(&mut self, table: TableSet) -> TableSet {
        debug!("active table swapped: {} characters", table.len());
        mem::replace(&mut self.table, table)
    }

    /// Encode text to wire code.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        render_encoded(&self.encode_units(text))
    }

    /// Encode text to tagged units.
    ///
    /// A newline without a table entry produces no unit.
    #[must_use]
    pub fn encode_units<'a>(&'a self, text: &str) -> Vec<EncodedUnit<'a>> {
        let mut units = Vec::with_capacity(text.len());

        for ch in text.chars() {
            if ch == SEPARATOR {
                units.push(EncodedUnit::WordBreak);
            } else if let Some(code) = self.table.encode_char(ch) {
                units.push(EncodedUnit::Code(code));
            } else if ch != NEWLINE {
                units.push(EncodedUnit::Unknown(ch));
            }
        }

        units
    }

    /// Decode wire code to text.
    #[must_use]
    pub fn decode(&self, code: &str) -> String {
        self.decode_with(code, EmptyCode::Escape)
    }

    /// Decode wire code to text with an explicit empty-code policy.
    #[must_use]
    pub fn decode_with(&self, code: &str, empty: EmptyCode) -> String {
        render_decoded(&self.decode_units_with(code, empty))
    }

    /// Decode wire code to tagged units.
    #[must_use]
    pub fn decode_units(&self, code: &str) -> Vec<DecodedUnit> {
        self.decode_units_with(code, EmptyCode::Escape)
    }

    /// Decode wire code to tagged units with an explicit empty-code policy.
    ///
    /// Text after the last delimiter is dropped. A pending code that is
    /// exactly a space or a newline is neither emitted nor cleared, so it
    /// prefixes the next code.
    #[must_use]
    pub fn decode_units_with(&self, code: &str, empty: EmptyCode) -> Vec<DecodedUnit> {
        let mut units = Vec::new();
        let mut pending = String::new();
        let mut prev = None;

        for ch in code.chars() {
            if ch != DELIMITER {
                pending.push(ch);
            } else {
                if let Some(decoded) = self.table.char_for(&pending) {
                    units.push(DecodedUnit::Char(decoded));
                    pending.clear();
                } else if !is_lone_whitespace(&pending)
                    && !(pending.is_empty() && empty == EmptyCode::Skip)
                {
                    trace!("no table entry for code {:?}", pending);
                    units.push(DecodedUnit::Unknown(mem::take(&mut pending)));
                }

                if prev == Some(DELIMITER) {
                    units.push(DecodedUnit::WordBreak);
                }
            }
            prev = Some(ch);
        }

        if !pending.is_empty() {
            debug!("dropping unterminated code {:?}", pending);
        }

        units
    }
}

fn is_lone_whitespace(pending: &str) -> bool {
    let mut chars = pending.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(SEPARATOR | NEWLINE), None)
    )
}
