//! Table validation errors.

use alloc::string::String;
use thiserror::Error;

/// Rejected table definition.
///
/// Raised only while building a [`TableSet`](crate::TableSet). A transcoder
/// that fails to swap in a new table keeps its previous one.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// Key is not exactly one character.
    #[error("invalid table key {key:?}: expected exactly one character")]
    InvalidKey {
        /// Offending key as supplied
        key: String,
    },

    /// Table definition is not a character to code mapping.
    #[error("invalid table: expected a mapping of characters to codes, got {found}")]
    NotAMapping {
        /// Kind of value found instead
        found: &'static str,
    },

    /// Code for a key is not a string.
    #[error("invalid code for key {key:?}: expected a string, got {found}")]
    NonStringCode {
        /// Key whose code is malformed
        key: String,
        /// Kind of value found instead
        found: &'static str,
    },
}
