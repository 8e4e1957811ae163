//! Core conversion modules
//!
//! This module contains the table engine:
//! - `table`: span-resolving grid builder and row classifier
//! - `serialize`: Markdown, CSV, TSV and JSON encoders
//! - `source`: the row-group model tables arrive in
//! - `options`: encoding selection and settings

pub mod options;
pub mod serialize;
pub mod source;
pub mod table;

// Re-export main types
pub use options::{FormatConfig, TableFormat, TableSettings};
pub use serialize::serialize;
pub use source::{FlatRow, RowGroup, TableSource};
pub use table::{
    classify_rows, Grid, GridBuilder, GridCell, GroupKind, RowPosition, RowTag, SourceCell,
    SourceRow, SpanOrigin,
};
