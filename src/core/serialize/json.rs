//! JSON array-of-arrays encoding

use serde::Serialize;
use serde_json::value::RawValue;

use crate::core::table::Grid;
use crate::utils::error::ConversionResult;

/// One serialized cell
#[derive(Serialize)]
#[serde(untagged)]
enum JsonCell<'a> {
    Text(&'a str),
    Literal(&'a RawValue),
}

/// What an empty cell becomes
enum EmptyCell {
    /// The configured text is a JSON primitive and is written as-is
    Literal(Box<RawValue>),
    /// Anything else is written as a JSON string
    Text(String),
}

impl EmptyCell {
    fn parse(literal: &str) -> Self {
        match RawValue::from_string(literal.to_string()) {
            Ok(raw) if is_primitive(raw.get()) => EmptyCell::Literal(raw),
            _ => EmptyCell::Text(literal.to_string()),
        }
    }

    fn as_cell(&self) -> JsonCell<'_> {
        match self {
            EmptyCell::Literal(raw) => JsonCell::Literal(raw),
            EmptyCell::Text(text) => JsonCell::Text(text),
        }
    }
}

fn is_primitive(json: &str) -> bool {
    !json.trim_start().starts_with(['[', '{'])
}

/// Render a grid as an array of row arrays.
///
/// Empty cells become `empty_cell_json`: verbatim when it is a JSON
/// primitive such as `null` or `"N/A"`, quoted otherwise.
pub fn to_json(grid: &Grid, empty_cell_json: &str) -> ConversionResult<String> {
    if grid.is_empty() {
        return Ok("[]".to_string());
    }

    let empty = EmptyCell::parse(empty_cell_json);
    let rows: Vec<Vec<JsonCell<'_>>> = grid
        .text_rows()
        .map(|row| {
            row.into_iter()
                .map(|content| {
                    if content.is_empty() {
                        empty.as_cell()
                    } else {
                        JsonCell::Text(content)
                    }
                })
                .collect()
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
