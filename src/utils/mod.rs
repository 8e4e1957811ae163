//! Utility modules
//!
//! Error, warning and result types.

pub mod error;

pub use error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};
