//! Grid serialization
//!
//! Renders a finished [`Grid`] into one of the supported text encodings.
//! None of them has span syntax, so a spanned cell's content is repeated at
//! every coordinate the span covers.
//!
//! - `markdown`: pipe table with a `| --- |` divider after the header row
//! - `delimited`: CSV and TSV records
//! - `json`: array of row arrays with a configurable empty-cell literal

pub mod delimited;
pub mod json;
pub mod markdown;

pub use delimited::to_delimited;
pub use json::to_json;
pub use markdown::{escape_cell, to_markdown};

use super::options::{FormatConfig, TableFormat};
use super::table::{Grid, RowTag};
use crate::utils::error::ConversionResult;

/// Render `grid` in the encoding chosen by `config`.
///
/// Row tags are only consulted for Markdown. Zero-row and zero-column grids
/// produce `[]` for JSON and an empty string otherwise.
pub fn serialize(grid: &Grid, tags: &[RowTag], config: &FormatConfig) -> ConversionResult<String> {
    log::debug!(
        "serializing {}x{} table as {}",
        grid.height(),
        grid.width(),
        config.format
    );

    match config.format {
        TableFormat::Markdown => Ok(to_markdown(grid, tags)),
        format @ (TableFormat::Csv | TableFormat::Tsv) => {
            to_delimited(grid, format.delimiter().unwrap_or(b','))
        }
        TableFormat::Json => to_json(grid, &config.empty_cell_json),
    }
}
