//! Output format selection.
//!
//! [`OutputFormat`] names one of the three writers in
//! [`core::output`](crate::core::output); [`write_to_format`] and
//! [`to_format_string`] dispatch to it. The column set is the same in every
//! format.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatsift::Result<()> {
//! use chatsift::config::OutputConfig;
//! use chatsift::format::{OutputFormat, to_format_string};
//! use chatsift::TranscriptParser;
//!
//! let table = TranscriptParser::new().parse_str("01/02/23, 10:00 - Alice: Hello!");
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! let jsonl = to_format_string(table.records(), format, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::error::{ChatsiftError, Result};
use crate::record::MessageRecord;

/// Output format for record tables.
///
/// ```rust
/// use chatsift::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Delimited text with a header row (default)
    #[default]
    Csv,

    /// A single JSON array
    Json,

    /// One JSON object per line, also known as NDJSON
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    Jsonl,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Cargo feature that enables the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        ext.parse::<OutputFormat>().map_err(|_| {
            ChatsiftError::invalid_format(
                "output",
                format!("unknown file extension '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "unknown format '{s}'. Expected one of: {}",
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> ChatsiftError {
    ChatsiftError::invalid_format(
        "output",
        format!(
            "{format} output requires the '{}' feature",
            format.required_feature()
        ),
    )
}

/// Writes records to `path` in `format`.
///
/// # Errors
///
/// Returns an error if the writer's feature is disabled or the file can't be
/// written.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[MessageRecord],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders records as a string in `format`.
///
/// # Errors
///
/// Returns an error if the writer's feature is disabled or serialization
/// fails.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[MessageRecord],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
