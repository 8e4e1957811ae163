//! Encoding selection and formatting configuration

use std::fmt;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::data::constants::DEFAULT_EMPTY_CELL_JSON;
use crate::utils::error::ConversionWarning;

/// Target encoding for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Markdown,
    Csv,
    Tsv,
    Json,
}

/// Accepted setting values, lowercase
static FORMAT_NAMES: phf::Map<&'static str, TableFormat> = phf_map! {
    "markdown" => TableFormat::Markdown,
    "md" => TableFormat::Markdown,
    "csv" => TableFormat::Csv,
    "tsv" => TableFormat::Tsv,
    "json" => TableFormat::Json,
};

impl TableFormat {
    /// All encodings, in display order
    pub const ALL: [TableFormat; 4] = [
        TableFormat::Markdown,
        TableFormat::Csv,
        TableFormat::Tsv,
        TableFormat::Json,
    ];

    /// Look up a setting value, ignoring case and surrounding whitespace
    pub fn from_setting(value: &str) -> Option<Self> {
        FORMAT_NAMES
            .get(value.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    /// Canonical setting value
    pub fn name(&self) -> &'static str {
        match self {
            TableFormat::Markdown => "markdown",
            TableFormat::Csv => "csv",
            TableFormat::Tsv => "tsv",
            TableFormat::Json => "json",
        }
    }

    /// Field delimiter for the delimited encodings
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            TableFormat::Csv => Some(b','),
            TableFormat::Tsv => Some(b'\t'),
            _ => None,
        }
    }

    /// Whether the encoding can show a caption
    pub fn supports_caption(&self) -> bool {
        matches!(self, TableFormat::Markdown)
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-request formatting configuration.
///
/// Read-only once built; the same value can be shared by every table
/// converted in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Target encoding
    pub format: TableFormat,
    /// JSON text written in place of an empty cell
    pub empty_cell_json: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            format: TableFormat::Markdown,
            empty_cell_json: DEFAULT_EMPTY_CELL_JSON.to_string(),
        }
    }
}

impl FormatConfig {
    /// Configuration for `format` with the default empty-cell literal
    pub fn new(format: TableFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_empty_cell_json(mut self, literal: impl Into<String>) -> Self {
        self.empty_cell_json = literal.into();
        self
    }
}

/// Settings as stored by the host application.
///
/// Both keys may be absent; values are not validated beyond default
/// substitution and format-name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_cell_json: Option<String>,
}

impl TableSettings {
    /// Build the configuration for one conversion request.
    ///
    /// An unsupported format name falls back to Markdown and yields a warning.
    pub fn resolve(&self) -> (FormatConfig, Option<ConversionWarning>) {
        let mut config = FormatConfig::default();
        let mut warning = None;

        if let Some(ref name) = self.format {
            match TableFormat::from_setting(name) {
                Some(format) => config = config.with_format(format),
                None => {
                    log::warn!("unsupported table format {:?}, using markdown", name);
                    warning = Some(
                        ConversionWarning::new(format!("unsupported table format `{}`", name))
                            .with_suggestion("converted to markdown instead"),
                    );
                }
            }
        }

        if let Some(ref literal) = self.empty_cell_json {
            config = config.with_empty_cell_json(literal.as_str());
        }

        (config, warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_setting() {
        assert_eq!(TableFormat::from_setting("csv"), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_setting(" TSV "), Some(TableFormat::Tsv));
        assert_eq!(TableFormat::from_setting("md"), Some(TableFormat::Markdown));
        assert_eq!(TableFormat::from_setting("xlsx"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for format in TableFormat::ALL {
            assert_eq!(TableFormat::from_setting(format.name()), Some(format));
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let (config, warning) = TableSettings::default().resolve();
        assert_eq!(config, FormatConfig::default());
        assert_eq!(config.empty_cell_json, "null");
        assert!(warning.is_none());
    }

    #[test]
    fn test_resolve_unknown_format() {
        let settings = TableSettings {
            format: Some("cvs".to_string()),
            empty_cell_json: Some("\"N/A\"".to_string()),
        };
        let (config, warning) = settings.resolve();
        assert_eq!(config.format, TableFormat::Markdown);
        assert_eq!(config.empty_cell_json, "\"N/A\"");
        assert!(warning.unwrap().message.contains("cvs"));
    }

    #[test]
    fn test_settings_keys() {
        let settings: TableSettings =
            serde_json::from_str(r#"{"format": "json", "emptyCellJson": "0"}"#).unwrap();
        let (config, _) = settings.resolve();
        assert_eq!(config.format, TableFormat::Json);
        assert_eq!(config.empty_cell_json, "0");
    }
}
