//! # gridtext
//!
//! Span-aware conversion of structured tables into flat text encodings.
//!
//! ## Features
//!
//! - **Span Resolution**: rebuilds a rectangular grid from ragged rows with
//!   `colspan`/`rowspan`
//! - **Four Encodings**: Markdown pipe tables, CSV, TSV and JSON
//! - **Structural Headers**: header rows are found from row-group position,
//!   not cell content
//! - **Graceful Degradation**: malformed tables produce best-effort output and
//!   warnings, never errors
//! - **WASM Support**: compiles to WebAssembly for browser extensions
//!
//! ## Usage Examples
//!
//! ```rust
//! use gridtext::{convert_table, FormatConfig, RowGroup, SourceCell, TableFormat, TableSource};
//!
//! let table = TableSource::new()
//!     .with_group(RowGroup::header(vec![vec![
//!         SourceCell::header("A"),
//!         SourceCell::header("B"),
//!     ]]))
//!     .with_group(RowGroup::body(vec![vec![SourceCell::new("1"), SourceCell::new("2")]]));
//!
//! let markdown = convert_table(&table, &FormatConfig::default());
//! assert_eq!(markdown, "| A | B |\n| --- | --- |\n| 1 | 2 |");
//!
//! let csv = convert_table(&table, &FormatConfig::new(TableFormat::Csv));
//! assert_eq!(csv, "A,B\n1,2");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static constants
pub mod data;

/// Feature modules - artifact filtering and cell predicates
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types
pub use crate::core::options::{FormatConfig, TableFormat, TableSettings};
pub use crate::core::serialize::serialize;
pub use crate::core::source::{RowGroup, TableSource};
pub use crate::core::table::{
    Grid, GridBuilder, GridCell, GroupKind, RowPosition, RowTag, SourceCell, SourceRow,
};

// Re-export feature functions
pub use features::{is_hide_button_table, is_unconvertible_cell};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};

use crate::core::table::classify_rows;

/// Convert one table, returning the text and any warnings.
///
/// The pipeline:
/// 1. Drops collapsible-section artifact tables (empty output)
/// 2. Flattens row groups and classifies each row
/// 3. Builds the span-resolved grid
/// 4. Serializes it, adding the caption for Markdown
///
/// Never fails: problems in the input are reported as warnings.
pub fn convert_table_with_diagnostics(
    table: &TableSource,
    config: &FormatConfig,
) -> ConversionOutput {
    if is_hide_button_table(table) {
        log::debug!("skipping hide-button table");
        return ConversionOutput::new(String::new());
    }

    let rows = table.flatten();
    let positions: Vec<RowPosition> = rows.iter().map(|row| row.position.clone()).collect();
    let tags = classify_rows(&positions);

    let mut warnings = Vec::new();
    for (position, tag) in positions.iter().zip(&tags) {
        if *tag == RowTag::Unclassified {
            warnings.push(
                ConversionWarning::at_row(
                    format!("row belongs to unknown group `{}`", position.group),
                    position.row_index,
                )
                .with_suggestion("emitted as a body row"),
            );
        }
    }

    let mut builder = GridBuilder::new();
    for row in &rows {
        builder.add_row(row.cells.to_vec());
    }
    let grid = builder.finalize();

    let body = match serialize(&grid, &tags, config) {
        Ok(text) => text,
        Err(e) => {
            log::error!("table serialization failed: {}", e);
            warnings.push(ConversionWarning::new(format!(
                "{} output could not be produced: {}",
                config.format, e
            )));
            String::new()
        }
    };

    let caption = table
        .caption
        .as_deref()
        .map(str::trim)
        .filter(|caption| !caption.is_empty() && config.format.supports_caption());

    let content = match caption {
        Some(caption) if !body.is_empty() => format!("**{}**\n\n{}", caption, body),
        _ => body,
    };

    ConversionOutput::with_warnings(content, warnings)
}

/// Convert one table, logging warnings and returning only the text.
///
/// **For integration use**, prefer [`convert_table_with_diagnostics`], which
/// hands warnings back to the caller.
pub fn convert_table(table: &TableSource, config: &FormatConfig) -> String {
    let output = convert_table_with_diagnostics(table, config);

    for warning in &output.warnings {
        log::warn!("{}", warning);
    }

    output.content
}

/// Convert one table using host settings.
///
/// Settings are resolved once; an unsupported format name falls back to
/// Markdown and is reported among the warnings.
pub fn convert_table_with_settings(
    table: &TableSource,
    settings: &TableSettings,
) -> ConversionOutput {
    let (config, settings_warning) = settings.resolve();
    let mut output = convert_table_with_diagnostics(table, &config);

    if let Some(warning) = settings_warning {
        output.warnings.insert(0, warning);
    }
    output
}

/// Convert several independent tables with a shared configuration
pub fn convert_tables(tables: &[TableSource], config: &FormatConfig) -> Vec<ConversionOutput> {
    tables
        .iter()
        .map(|table| convert_table_with_diagnostics(table, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header_body() -> TableSource {
        TableSource::new()
            .with_group(RowGroup::header(vec![vec![
                SourceCell::header("A"),
                SourceCell::header("B"),
            ]]))
            .with_group(RowGroup::body(vec![vec![
                SourceCell::new("1"),
                SourceCell::new("2"),
            ]]))
    }

    #[test]
    fn test_markdown_basic() {
        let result = convert_table(&header_body(), &FormatConfig::default());
        assert_eq!(result, "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_markdown_caption() {
        let table = header_body().with_caption("  Totals ");
        let result = convert_table(&table, &FormatConfig::default());
        assert_eq!(result, "**Totals**\n\n| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_caption_dropped_for_other_formats() {
        let table = header_body().with_caption("Totals");
        for format in [TableFormat::Csv, TableFormat::Tsv, TableFormat::Json] {
            let result = convert_table(&table, &FormatConfig::new(format));
            assert!(!result.contains("Totals"), "{} kept the caption", format);
        }
    }

    #[test]
    fn test_hide_button_table_is_suppressed() {
        let table = TableSource::from_rows(vec![vec![
            SourceCell::header("hide").with_control("hide")
        ]])
        .with_caption("ignored");
        for format in TableFormat::ALL {
            let output = convert_table_with_diagnostics(&table, &FormatConfig::new(format));
            assert_eq!(output.content, "");
            assert!(!output.has_warnings());
        }
    }

    #[test]
    fn test_unknown_group_warns() {
        let table = header_body().with_group(RowGroup::new(
            GroupKind::Unknown("div".to_string()),
            vec![vec![SourceCell::new("x"), SourceCell::new("y")]],
        ));
        let output = convert_table_with_diagnostics(&table, &FormatConfig::default());

        assert_eq!(
            output.content,
            "| A | B |\n| --- | --- |\n| 1 | 2 |\n| x | y |"
        );
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].row, Some(2));
        assert!(output.warnings[0].message.contains("div"));
    }

    #[test]
    fn test_empty_table() {
        let table = TableSource::new();
        assert_eq!(convert_table(&table, &FormatConfig::default()), "");
        assert_eq!(convert_table(&table, &FormatConfig::new(TableFormat::Csv)), "");
        assert_eq!(convert_table(&table, &FormatConfig::new(TableFormat::Json)), "[]");
    }

    #[test]
    fn test_settings_fallback() {
        let settings = TableSettings {
            format: Some("yaml".to_string()),
            empty_cell_json: None,
        };
        let output = convert_table_with_settings(&header_body(), &settings);
        assert!(output.content.contains("| --- | --- |"));
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].message.contains("yaml"));
    }

    #[test]
    fn test_convert_tables_independent() {
        let tables = vec![
            header_body(),
            TableSource::from_rows(vec![vec![SourceCell::with_spans("Wide", 3, 1)]]),
        ];
        let outputs = convert_tables(&tables, &FormatConfig::new(TableFormat::Csv));
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].content, "A,B\n1,2");
        assert_eq!(outputs[1].content, "Wide,Wide,Wide");
    }
}
