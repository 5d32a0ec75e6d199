//! # Chatsift
//!
//! Turns an exported chat transcript into a table of message records.
//!
//! ## Overview
//!
//! A transcript is one text blob with timestamped entries, some of which run
//! over several lines:
//!
//! ```text
//! 01/02/23, 9:05 AM - Alice: Hello there
//! 01/02/23, 9:06 AM - Bob: Hi!
//! Are we still on for tonight?
//! 01/02/23, 22:10 - Bob left the group
//! ```
//!
//! Parsing happens in two steps. The text is first cut into one chunk per
//! entry at each line-anchored header ([`parsing`]). Each chunk then becomes
//! zero or one [`MessageRecord`] ([`parser`]): the date and time are
//! normalized, the body is split into sender and message (or attributed to
//! the chat system), placeholder entries are dropped, and calendar and
//! clock attributes are derived.
//!
//! Parsing is tolerant. Malformed entries are dropped and counted, never
//! reported as errors; input without any entry header gives an empty table.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! let text = "01/02/23, 9:05 AM - Alice: Hello there\n\
//!             01/02/23, 22:10 - Bob left the group";
//!
//! assert!(has_header(text));
//!
//! let table = TranscriptParser::new().parse_str(text);
//! assert_eq!(table.len(), 2);
//!
//! let first = &table.records()[0];
//! assert_eq!(first.sender().as_str(), "Alice");
//! assert_eq!(first.hour(), 9);
//! assert_eq!(first.period_bucket().label(), "9-10");
//!
//! assert!(table.records()[1].is_system());
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - header grammar, segmentation, body classification
//! - [`parser`] - [`TranscriptParser`] and [`ParseReport`]
//! - [`record`] - [`MessageRecord`], [`Sender`], [`HourBucket`], output columns
//! - [`core`] - [`ChatTable`](core::ChatTable), filtering, stats, writers
//! - [`format`] - output format selection
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`OutputConfig`](config::OutputConfig)
//! - [`error`] - [`ChatsiftError`], [`Result`]
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;

pub use crate::core::ChatTable;
pub use error::{ChatsiftError, Result};
pub use parser::{DropReason, ParseReport, TranscriptParser};
pub use parsing::has_header;
pub use record::{HourBucket, MessageRecord, Sender};

/// Parses `text` with the default configuration.
///
/// Shorthand for `TranscriptParser::new().parse_str(text)`.
pub fn parse(text: &str) -> ChatTable {
    TranscriptParser::new().parse_str(text)
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatsiftError, Result};

    pub use crate::config::{OutputConfig, ParserConfig};
    pub use crate::parser::{ParseReport, TranscriptParser};
    pub use crate::parsing::{DateLayout, has_header};
    pub use crate::record::{HourBucket, MessageRecord, Sender};

    pub use crate::core::{ChatStats, ChatTable, FilterConfig, MessageClassifier, apply_filters};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
