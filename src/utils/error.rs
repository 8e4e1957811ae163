//! Error handling for table conversions
//!
//! The table engine itself never fails: structural problems degrade into
//! warnings. [`ConversionError`] is reserved for the edges of the crate,
//! where table descriptions are read and decoded.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// Invalid input - a table description or settings record could not be decoded
    InvalidInput {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput {
                message,
                line,
                column,
            } => {
                if let (Some(l), Some(c)) = (line, column) {
                    write!(f, "Invalid input at line {}, column {}: {}", l, c, message)
                } else {
                    write!(f, "Invalid input: {}", message)
                }
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ConversionError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return ConversionError::IoError {
                message: err.to_string(),
            };
        }
        ConversionError::InvalidInput {
            message: err.to_string(),
            line: Some(err.line()),
            column: Some(err.column()),
        }
    }
}

impl From<csv::Error> for ConversionError {
    fn from(err: csv::Error) -> Self {
        ConversionError::internal(format!("delimited writer failed: {}", err))
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub message: String,
    /// Table row the warning refers to (0-indexed)
    pub row: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConversionWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            row: None,
            suggestion: None,
        }
    }

    pub fn at_row(message: impl Into<String>, row: usize) -> Self {
        Self {
            row: Some(row),
            ..Self::new(message)
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(r) = self.row {
            write!(f, "Warning at row {}: {}", r, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl ConversionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ConversionError::InternalError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ConversionError::invalid("expected a table");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("expected a table"));
    }

    #[test]
    fn test_json_error_location() {
        let err: ConversionError = serde_json::from_str::<Vec<u8>>("[1,\n x]")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.contains("line 2"));
        assert!(msg.contains("column"));
    }

    #[test]
    fn test_warning_display() {
        let warning = ConversionWarning::at_row("unknown row group `div`", 3)
            .with_suggestion("emitted as a body row");
        let msg = warning.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("`div`"));
        assert!(msg.contains("(emitted as a body row)"));
    }

    #[test]
    fn test_conversion_output() {
        let output = ConversionOutput::new("hello".to_string());
        assert!(!output.has_warnings());

        let output_with_warn = ConversionOutput::with_warnings(
            "hello".to_string(),
            vec![ConversionWarning::new("test warning")],
        );
        assert!(output_with_warn.has_warnings());
    }
}
