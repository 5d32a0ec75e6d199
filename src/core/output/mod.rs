//! Output format writers.
//!
//! Every writer emits the same fixed column set, [`COLUMNS`](crate::record::COLUMNS),
//! in the same order:
//! - [`write_csv`] / [`to_csv`] - delimited text with a header row - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON record per line - requires `json-output` feature
//!
//! An empty table still produces a well-formed document: a lone CSV header,
//! `[]` for JSON, and an empty JSONL file.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::core::output::{to_csv, write_csv, write_json, write_jsonl};
//! use chatsift::config::OutputConfig;
//! use chatsift::TranscriptParser;
//!
//! let table = TranscriptParser::new().parse("chat.txt")?;
//! let config = OutputConfig::new();
//!
//! write_csv(table.records(), "chat.csv", &config)?;
//! write_json(table.records(), "chat.json", &config)?;
//! write_jsonl(table.records(), "chat.jsonl")?;
//!
//! let csv_string = to_csv(table.records(), &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
