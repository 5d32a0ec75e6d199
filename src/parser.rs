//! Transcript parser: raw chunks in, message records out.
//!
//! [`TranscriptParser`] drives the whole pipeline. The text is cut into chunks
//! at entry headers (see [`parsing::segmenter`](crate::parsing::segmenter)),
//! and every chunk becomes zero or one [`MessageRecord`]:
//!
//! 1. the header date is read with the configured [`DateLayout`]s, in order
//! 2. the header time is read as 12-hour (meridiem present) or 24-hour
//! 3. the body is split into sender and message, or attributed to the system
//! 4. empty and placeholder bodies are dropped
//! 5. system notices are dropped if the config asks for it
//!
//! A chunk that fails any step is dropped and counted in [`ParseReport`];
//! malformed content never produces an error.
//!
//! # Example
//!
//! ```rust
//! use chatsift::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let (table, report) = parser.parse_with_report(
//!     "01/02/23, 9:05 AM - Alice: Hello there\n\
//!      99/99/23, 9:06 AM - Bob: lost\n\
//!      01/02/23, 9:07 AM - Bob: This message was deleted",
//! );
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(report.chunks, 3);
//! assert_eq!(report.invalid_date, 1);
//! assert_eq!(report.placeholder, 1);
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::ParserConfig;
use crate::core::ChatTable;
use crate::error::{ChatsiftError, Result};
use crate::parsing::{DateLayout, RawChunk, chunks, classify_body_with, has_header, normalize_date, normalize_time};
use crate::record::MessageRecord;

const BOM: char = '\u{feff}';

/// Why a chunk produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Header date not valid under any configured layout.
    InvalidDate,
    /// Header time out of range for its clock convention.
    InvalidTime,
    /// Message body empty after trimming.
    Empty,
    /// Message body is exactly a placeholder.
    Placeholder,
    /// System notice, dropped by [`ParserConfig::skip_system_messages`].
    System,
}

impl DropReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DropReason::InvalidDate => "invalid_date",
            DropReason::InvalidTime => "invalid_time",
            DropReason::Empty => "empty",
            DropReason::Placeholder => "placeholder",
            DropReason::System => "system",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-parse diagnostics: how many chunks were seen and why some were dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Chunks found by the segmenter.
    pub chunks: usize,
    /// Records produced.
    pub records: usize,
    pub invalid_date: usize,
    pub invalid_time: usize,
    pub empty: usize,
    pub placeholder: usize,
    pub system: usize,
    /// Bytes before the first header.
    pub preamble_bytes: usize,
}

impl ParseReport {
    /// Total chunks that produced no record.
    pub fn dropped(&self) -> usize {
        self.invalid_date + self.invalid_time + self.empty + self.placeholder + self.system
    }

    /// Chunks dropped for `reason`.
    pub fn count(&self, reason: DropReason) -> usize {
        match reason {
            DropReason::InvalidDate => self.invalid_date,
            DropReason::InvalidTime => self.invalid_time,
            DropReason::Empty => self.empty,
            DropReason::Placeholder => self.placeholder,
            DropReason::System => self.system,
        }
    }

    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::InvalidDate => self.invalid_date += 1,
            DropReason::InvalidTime => self.invalid_time += 1,
            DropReason::Empty => self.empty += 1,
            DropReason::Placeholder => self.placeholder += 1,
            DropReason::System => self.system += 1,
        }
    }
}

/// Parser for exported chat transcripts.
///
/// The parser holds only its configuration; every call works on its own
/// input and returns its own table, so one parser can be shared freely.
///
/// # Example
///
/// ```rust
/// use chatsift::{Sender, TranscriptParser};
///
/// let table = TranscriptParser::new().parse_str("01/02/23, 22:10 - Bob left the group");
///
/// let record = &table.records()[0];
/// assert_eq!(*record.sender(), Sender::System);
/// assert_eq!(record.message(), "Bob left the group");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a parser with the default (day-first) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser after checking the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidConfig`] if no date layout is given,
    /// since every chunk would then be dropped.
    pub fn try_with_config(config: ParserConfig) -> Result<Self> {
        if config.date_layouts.is_empty() {
            return Err(ChatsiftError::invalid_config(
                "at least one date layout is required",
            ));
        }
        Ok(Self { config })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text into a record table.
    ///
    /// Never fails: text with no recognizable entry gives an empty table.
    pub fn parse_str(&self, text: &str) -> ChatTable {
        self.parse_with_report(text).0
    }

    /// Parses transcript text and reports what was dropped and why.
    ///
    /// A leading byte-order mark is ignored.
    pub fn parse_with_report(&self, text: &str) -> (ChatTable, ParseReport) {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let mut report = ParseReport::default();
        let mut records = Vec::new();

        for chunk in chunks(text) {
            if report.chunks == 0 {
                report.preamble_bytes = chunk.offset();
            }
            report.chunks += 1;

            match self.build_record(&chunk) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    debug!(offset = chunk.offset(), %reason, "dropped chunk");
                    report.record_drop(reason);
                }
            }
        }

        if report.chunks == 0 {
            report.preamble_bytes = text.len();
        }
        report.records = records.len();

        debug!(
            chunks = report.chunks,
            records = report.records,
            dropped = report.dropped(),
            "parsed transcript"
        );

        (ChatTable::new(records), report)
    }

    /// Like [`parse_str`](Self::parse_str), but rejects text without a
    /// single entry header.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidFormat`] if `text` is not a chat export.
    pub fn parse_strict(&self, text: &str) -> Result<ChatTable> {
        self.parse_strict_with_report(text).map(|(table, _)| table)
    }

    /// [`parse_strict`](Self::parse_strict) with the drop report.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidFormat`] if `text` is not a chat export.
    pub fn parse_strict_with_report(&self, text: &str) -> Result<(ChatTable, ParseReport)> {
        if !has_header(text.strip_prefix(BOM).unwrap_or(text)) {
            return Err(ChatsiftError::not_a_transcript());
        }
        Ok(self.parse_with_report(text))
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or is not UTF-8.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<ChatTable> {
        let text = read_transcript(path)?;
        Ok(self.parse_str(&text))
    }

    /// Turns one chunk into a record, or says why it can't.
    pub fn build_record(&self, chunk: &RawChunk<'_>) -> std::result::Result<MessageRecord, DropReason> {
        let header = chunk.header();

        let date = normalize_date(header.date, &self.config.date_layouts).ok_or(DropReason::InvalidDate)?;
        let time = normalize_time(header.time, header.meridiem).ok_or(DropReason::InvalidTime)?;

        let classified = classify_body_with(chunk.body(), self.config.sender_rule);
        if classified.message.is_empty() {
            return Err(DropReason::Empty);
        }
        if self.config.is_placeholder(classified.message) {
            return Err(DropReason::Placeholder);
        }
        if self.config.skip_system_messages && classified.sender.is_system() {
            return Err(DropReason::System);
        }

        Ok(MessageRecord::new(date, time, classified.sender, classified.message))
    }

    /// Date layouts this parser tries, in order.
    pub fn date_layouts(&self) -> &[DateLayout] {
        &self.config.date_layouts
    }
}

/// Reads a transcript file as UTF-8.
///
/// # Errors
///
/// Returns [`ChatsiftError::Io`] if the file can't be read and
/// [`ChatsiftError::Utf8`] if it isn't valid UTF-8.
pub fn read_transcript(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| ChatsiftError::Utf8 {
        context: path.display().to_string(),
        source,
    })
}
