//! Constants shared by the table engine
//!
//! Literal values the converter matches against or emits verbatim:
//! - Collapsible-section control label
//! - Default JSON literal for empty cells
//! - Markdown divider token
//! - Span limits taken from the HTML table model

use lazy_static::lazy_static;
use regex::Regex;

/// Text of the only control found in collapsible-section artifact tables.
///
/// Matched exactly. Localised pages use other labels and are not detected.
pub const HIDE_CONTROL_LABEL: &str = "hide";

/// JSON text substituted for empty cells when no setting is supplied
pub const DEFAULT_EMPTY_CELL_JSON: &str = "null";

/// One column of the Markdown header divider
pub const MARKDOWN_DIVIDER_CELL: &str = "---";

/// Largest column span honoured per cell
pub const MAX_COLSPAN: usize = 1000;

/// Largest row span honoured per cell
pub const MAX_ROWSPAN: usize = 65534;

lazy_static! {
    /// Heading element names (`h1` through `h6`)
    pub static ref HEADING_TAG: Regex = Regex::new(r"(?i)^h[1-6]$").unwrap();

    /// Any run of whitespace, including newlines
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}
