//! Catalog loading errors.

use std::path::PathBuf;

use morse_core::TableError;
use thiserror::Error;

/// Failure to load or query a table catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The resource file could not be read.
    #[error("failed to read tables from {}: {source}", .path.display())]
    Read {
        /// Resource path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The resource is not valid JSON.
    #[error("malformed tables JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON root is not an object of named tables.
    #[error("expected an object of named tables, got {found}")]
    NotAnObject {
        /// Kind of value found instead
        found: &'static str,
    },

    /// The catalog defines no tables.
    #[error("no tables defined")]
    Empty,

    /// A named table failed validation.
    #[error("table {name:?}: {source}")]
    Table {
        /// Table name
        name: String,
        /// Validation failure
        source: TableError,
    },

    /// No table with the requested name.
    #[error("unknown table {name:?} (available: {available})")]
    UnknownTable {
        /// Requested name
        name: String,
        /// Comma separated list of defined names
        available: String,
    },
}
