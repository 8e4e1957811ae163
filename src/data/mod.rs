//! Data layer - Static constants
//!
//! Labels, literals and limits used by the table engine.

pub mod constants;

pub use constants::{
    DEFAULT_EMPTY_CELL_JSON, HIDE_CONTROL_LABEL, MARKDOWN_DIVIDER_CELL, MAX_COLSPAN, MAX_ROWSPAN,
};
