//! Source and grid cell types

use serde::{Deserialize, Deserializer, Serialize};

use crate::data::constants::{MAX_COLSPAN, MAX_ROWSPAN};

/// A cell as delivered by the document extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCell {
    /// Cell content, already rendered for the target encoding
    #[serde(default)]
    pub content: String,
    /// Number of columns this cell spans
    #[serde(
        default = "default_span",
        alias = "colspan",
        deserialize_with = "deserialize_colspan"
    )]
    pub col_span: usize,
    /// Number of rows this cell spans
    #[serde(
        default = "default_span",
        alias = "rowspan",
        deserialize_with = "deserialize_rowspan"
    )]
    pub row_span: usize,
    /// Whether the cell came from a header cell (`th`) rather than a data cell
    #[serde(default)]
    pub is_header: bool,
    /// Text of every interactive control inside the cell
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<String>,
}

impl SourceCell {
    /// Create a 1×1 data cell
    pub fn new(content: impl Into<String>) -> Self {
        SourceCell {
            content: content.into(),
            col_span: 1,
            row_span: 1,
            is_header: false,
            controls: Vec::new(),
        }
    }

    /// Create a 1×1 header cell
    pub fn header(content: impl Into<String>) -> Self {
        SourceCell {
            is_header: true,
            ..SourceCell::new(content)
        }
    }

    /// Create a data cell with the given spans.
    ///
    /// Spans below 1 become 1; spans above the HTML limits are capped.
    pub fn with_spans(content: impl Into<String>, col_span: i64, row_span: i64) -> Self {
        SourceCell {
            col_span: clamp_span(col_span, MAX_COLSPAN),
            row_span: clamp_span(row_span, MAX_ROWSPAN),
            ..SourceCell::new(content)
        }
    }

    /// Attach an interactive control label
    pub fn with_control(mut self, label: impl Into<String>) -> Self {
        self.controls.push(label.into());
        self
    }
}

/// Clamp a raw span attribute into `1..=max`
pub fn clamp_span(raw: i64, max: usize) -> usize {
    if raw < 1 {
        1
    } else {
        usize::try_from(raw).map_or(max, |span| span.min(max))
    }
}

fn default_span() -> usize {
    1
}

/// Raw span attribute. Extractors forward attribute text as-is, so both
/// numbers and strings are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpan {
    Int(i64),
    Float(f64),
    Text(String),
    Missing(Option<()>),
}

impl RawSpan {
    fn value(self) -> i64 {
        match self {
            RawSpan::Int(n) => n,
            RawSpan::Float(f) if f.is_finite() => f.trunc() as i64,
            RawSpan::Text(s) => s.trim().parse().unwrap_or(1),
            _ => 1,
        }
    }
}

fn deserialize_colspan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let raw = RawSpan::deserialize(deserializer)?;
    Ok(clamp_span(raw.value(), MAX_COLSPAN))
}

fn deserialize_rowspan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let raw = RawSpan::deserialize(deserializer)?;
    Ok(clamp_span(raw.value(), MAX_ROWSPAN))
}

/// The cell that owns a span's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanOrigin {
    /// Cell content
    pub content: String,
    /// Grid row of the top-left coordinate
    pub row: usize,
    /// Grid column of the top-left coordinate
    pub col: usize,
    /// Columns actually covered, after overlap truncation
    pub col_span: usize,
    /// Rows actually covered, after clamping to the grid height
    pub row_span: usize,
    /// Whether this is padding inserted for a ragged row
    pub is_placeholder: bool,
}

impl SpanOrigin {
    pub(crate) fn new(content: String, row: usize, col: usize) -> Self {
        SpanOrigin {
            content,
            row,
            col,
            col_span: 1,
            row_span: 1,
            is_placeholder: false,
        }
    }

    pub(crate) fn placeholder(row: usize, col: usize) -> Self {
        SpanOrigin {
            is_placeholder: true,
            ..SpanOrigin::new(String::new(), row, col)
        }
    }

    /// Whether the span covers grid coordinate `(row, col)`
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.row_span).contains(&row)
            && (self.col..self.col + self.col_span).contains(&col)
    }
}

/// A resolved grid coordinate.
///
/// Holds an index into the grid's origin list, never a copy of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Index of the owning span in [`Grid::origins`](super::Grid::origins)
    pub origin: usize,
    /// True only at the top-left coordinate of the span
    pub is_origin: bool,
}

impl GridCell {
    pub(crate) fn origin(origin: usize) -> Self {
        GridCell {
            origin,
            is_origin: true,
        }
    }

    pub(crate) fn covered(origin: usize) -> Self {
        GridCell {
            origin,
            is_origin: false,
        }
    }
}
