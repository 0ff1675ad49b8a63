//! WASM bindings for the Morse transcoder.
//!
//! Exposes a [`WasmTranscoder`] to JavaScript so a web page can encode,
//! decode and switch tables without a round trip to a server.

use morse_core::{EmptyCode, Transcoder};
use morse_tables::{CatalogError, TableCatalog};
use wasm_bindgen::prelude::*;

/// Transcoder plus the catalog it selects tables from.
#[wasm_bindgen]
pub struct WasmTranscoder {
    catalog: TableCatalog,
    active: String,
    transcoder: Transcoder,
}

#[wasm_bindgen]
impl WasmTranscoder {
    /// Create a transcoder over the built-in ITU table.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self::with_catalog(TableCatalog::builtin())
    }

    /// Create a transcoder from `tables.json` content, starting on its
    /// first table.
    #[wasm_bindgen]
    pub fn from_tables_json(json: &str) -> Result<WasmTranscoder, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Ok(Self::with_catalog(TableCatalog::from_json_str(json)?))
    }

    /// Names of the available tables.
    #[wasm_bindgen]
    pub fn table_names(&self) -> Vec<String> {
        self.catalog.names().map(str::to_string).collect()
    }

    /// Name of the active table.
    #[wasm_bindgen]
    pub fn active_table(&self) -> String {
        self.active.clone()
    }

    /// Switch to another table by name.
    #[wasm_bindgen]
    pub fn select_table(&mut self, name: &str) -> Result<(), JsError> {
        self.select(name)?;
        Ok(())
    }

    /// Encode text to Morse code.
    #[wasm_bindgen]
    pub fn encode(&self, text: &str) -> String {
        self.transcoder.encode(text)
    }

    /// Decode Morse code to text.
    #[wasm_bindgen]
    pub fn decode(&self, code: &str) -> String {
        self.transcoder.decode(code)
    }

    /// Decode without escaping empty codes at word boundaries.
    #[wasm_bindgen]
    pub fn decode_skip_empty(&self, code: &str) -> String {
        self.transcoder.decode_with(code, EmptyCode::Skip)
    }
}

impl WasmTranscoder {
    fn with_catalog(catalog: TableCatalog) -> Self {
        let (name, table) = catalog.default_table();
        let active = name.to_string();
        let transcoder = Transcoder::new(table.clone());
        Self {
            catalog,
            active,
            transcoder,
        }
    }

    fn select(&mut self, name: &str) -> Result<(), CatalogError> {
        let table = self.catalog.select(name)?.clone();
        self.transcoder.replace_table(table);
        self.active = name.to_string();
        Ok(())
    }
}

impl Default for WasmTranscoder {
    fn default() -> Self {
        Self::new()
    }
}
