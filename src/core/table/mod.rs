//! Table Grid Engine
//!
//! Turns ragged, span-annotated rows into a dense rectangular grid and tags
//! each row as header or body for encodings that distinguish them.
//!
//! # Architecture
//!
//! ```text
//! Row groups -> Flattened rows -> Row classifier -> Grid builder -> Grid
//! ```
//!
//! # Example
//!
//! ```ignore
//! use gridtext::core::table::{GridBuilder, SourceCell};
//!
//! let mut builder = GridBuilder::new();
//! builder.add_row(vec![SourceCell::with_spans("Title", 2, 1)]);
//! builder.add_row(vec![SourceCell::new("X"), SourceCell::new("Y")]);
//! let grid = builder.finalize();
//! assert_eq!(grid.content(0, 1), Some("Title"));
//! ```

mod cell;
mod classify;
mod grid;


// Re-export public API
pub use cell::{clamp_span, GridCell, SourceCell, SpanOrigin};
pub use classify::{
    classify_rows, is_first_of_first_body_group, is_first_of_header_group, is_sole_row,
    GroupKind, RowPosition, RowTag,
};
pub use grid::{Grid, GridBuilder};

/// An ordered, left-to-right row of source cells
pub type SourceRow = Vec<SourceCell>;
