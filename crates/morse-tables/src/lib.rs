//! Morse Table Catalogs
//!
//! Loads the `tables.json` resource: a JSON object mapping table names to
//! `{ character: code }` objects. Every table is validated when the catalog
//! is loaded, so selecting a table later cannot fail on malformed data.
//!
//! ```json
//! {
//!     "International": { "A": ".-", "B": "-..." },
//!     "Cyrillic": { "А": ".-", "Б": "-..." }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod json;

pub use catalog::{TableCatalog, TableSummary, BUILTIN_TABLE_NAME};
pub use error::CatalogError;
pub use json::table_from_json;
