//! Morse Transcoder Core
//!
//! Table-driven transliteration between plain text and a dot/dash code.
//! This crate is `no_std` compatible (it needs `alloc`) so it can back both
//! the command line tool and the WASM bindings.
//!
//! # Modules
//!
//! - [`table`] - `TableSet`: forward and derived reverse mapping
//! - [`transcoder`] - `Transcoder`: encode, decode and table swap
//! - [`unit`] - Tagged encode/decode units and their wire rendering
//! - [`wire`] - Delimiter, separator and escape marker constants
//! - [`itu`] - Built-in ITU international table
//! - [`error`] - Table validation errors

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod itu;
pub mod table;
pub mod transcoder;
pub mod unit;
pub mod wire;

// Re-export commonly used types
pub use error::TableError;
pub use itu::ITU_TABLE;
pub use table::{CaseFold, TableSet};
pub use transcoder::{EmptyCode, Transcoder};
pub use unit::{render_decoded, render_encoded, DecodedUnit, EncodedUnit};
