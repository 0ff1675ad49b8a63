//! Named table catalogs.

use std::fs;
use std::path::Path;

use log::{debug, info};
use morse_core::TableSet;
use serde::Serialize;
use serde_json::Value;

use crate::error::CatalogError;
use crate::json::{kind, table_from_json};

/// Name of the table in [`TableCatalog::builtin`].
pub const BUILTIN_TABLE_NAME: &str = "International";

/// Ordered set of named, validated tables.
///
/// Never empty: every constructor rejects an empty catalog, and the first
/// table is the default selection.
#[derive(Clone, Debug)]
pub struct TableCatalog {
    tables: Vec<(String, TableSet)>,
}

/// Overview of one catalog table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Table name
    pub name: String,
    /// Number of characters
    pub characters: usize,
    /// Characters decode cannot produce
    pub shadowed: Vec<char>,
    /// Whether this is the catalog's default table
    pub default: bool,
}

impl TableCatalog {
    /// Catalog holding only the ITU international table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tables: vec![(BUILTIN_TABLE_NAME.to_string(), TableSet::itu())],
        }
    }

    /// Build a catalog from already validated tables.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Empty`] if `tables` yields nothing.
    pub fn from_tables<I>(tables: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, TableSet)>,
    {
        let tables: Vec<_> = tables.into_iter().collect();
        if tables.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { tables })
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Malformed JSON, a non-object root, an empty catalog, or the first
    /// table that fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json)?;
        let named = match root {
            Value::Object(named) => named,
            other => return Err(CatalogError::NotAnObject { found: kind(&other) }),
        };

        let mut tables = Vec::with_capacity(named.len());
        for (name, definition) in named {
            let table = table_from_json(&definition).map_err(|source| CatalogError::Table {
                name: name.clone(),
                source,
            })?;
            debug!("loaded table {:?} ({} characters)", name, table.len());
            tables.push((name, table));
        }

        Self::from_tables(tables)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Read`] if the file cannot be read, otherwise as
    /// [`TableCatalog::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "loaded {} table(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Table names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    /// Table with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableSet> {
        self.tables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, table)| table)
    }

    /// Table with the given name, or an error listing what exists.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownTable`] if no table has that name.
    pub fn select(&self, name: &str) -> Result<&TableSet, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::UnknownTable {
            name: name.to_string(),
            available: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    /// First table in the catalog, with its name.
    #[must_use]
    pub fn default_table(&self) -> (&str, &TableSet) {
        let (name, table) = &self.tables[0];
        (name.as_str(), table)
    }

    /// Per-table overview in document order.
    #[must_use]
    pub fn summaries(&self) -> Vec<TableSummary> {
        self.tables
            .iter()
            .enumerate()
            .map(|(i, (name, table))| TableSummary {
                name: name.clone(),
                characters: table.len(),
                shadowed: table.shadowed(),
                default: i == 0,
            })
            .collect()
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the catalog has no tables.
    ///
    /// Always `false` for a constructed catalog, since every constructor
    /// rejects an empty one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for TableCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
