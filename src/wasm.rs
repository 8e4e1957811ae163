//! WASM bindings for gridtext
//!
//! This module provides JavaScript-accessible functions for table conversion,
//! for use from a browser extension's content script.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{TableSettings, TableSource};

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl ConvertResult {
    fn failure(message: String) -> Self {
        ConvertResult {
            output: String::new(),
            success: false,
            error: Some(message),
            warnings: vec![],
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert one table
///
/// # Arguments
/// * `table` - table description (`{ caption, groups: [{ kind, rows }] }`)
/// * `settings` - `{ format, emptyCellJson }`, both optional
///
/// # Returns
/// `{ output, success, error, warnings }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertTable")]
pub fn convert_table_wasm(table: JsValue, settings: JsValue) -> JsValue {
    let settings: TableSettings = serde_wasm_bindgen::from_value(settings).unwrap_or_default();

    let result = match serde_wasm_bindgen::from_value::<TableSource>(table) {
        Ok(table) => {
            let output = crate::convert_table_with_settings(&table, &settings);
            ConvertResult {
                output: output.content,
                success: true,
                error: None,
                warnings: output.warnings.iter().map(ToString::to_string).collect(),
            }
        }
        Err(e) => ConvertResult::failure(format!("Invalid table description: {}", e)),
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Check whether a cell should bypass prose conversion
///
/// # Arguments
/// * `child_tags` - element names of the cell's direct children
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "isUnconvertibleCell")]
pub fn is_unconvertible_cell_wasm(child_tags: Vec<String>) -> bool {
    crate::is_unconvertible_cell(&child_tags)
}

/// Supported format names
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "supportedFormats")]
pub fn supported_formats() -> Vec<String> {
    crate::TableFormat::ALL
        .iter()
        .map(|format| format.name().to_string())
        .collect()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
