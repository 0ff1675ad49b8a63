//! JSON table definitions.

use morse_core::{TableError, TableSet};
use serde_json::Value;

/// Build a table from one `{ character: code }` JSON object.
///
/// Entries keep document order, so when two characters share a code the
/// one written later decodes.
///
/// # Errors
///
/// - [`TableError::NotAMapping`] if `value` is not an object
/// - [`TableError::NonStringCode`] if a code is not a string
/// - [`TableError::InvalidKey`] if a key is not a single character
pub fn table_from_json(value: &Value) -> Result<TableSet, TableError> {
    let Value::Object(entries) = value else {
        return Err(TableError::NotAMapping {
            found: kind(value),
        });
    };

    let mut pairs = Vec::with_capacity(entries.len());
    for (key, code) in entries {
        let Some(code) = code.as_str() else {
            return Err(TableError::NonStringCode {
                key: key.clone(),
                found: kind(code),
            });
        };
        pairs.push((key.as_str(), code));
    }

    TableSet::from_entries(pairs)
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
