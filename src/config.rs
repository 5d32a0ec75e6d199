//! Configuration types for parsing and output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - accepted date layouts, sender rule, placeholder bodies, notice handling
//! - [`OutputConfig`] - CSV delimiter and JSON layout
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ParserConfig;
//! use chatsift::TranscriptParser;
//!
//! let config = ParserConfig::month_first_fallback()
//!     .with_placeholder("You deleted this message");
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::{DateLayout, SenderRule};

/// Body of a poll entry, which carries no text of its own.
pub const POLL_PLACEHOLDER: &str = "POLL:";

/// Body left behind when a participant deletes a message.
pub const DELETED_PLACEHOLDER: &str = "This message was deleted";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatsift::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_system_messages(true);
/// assert_eq!(config.placeholders.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Date layouts tried in order; the first that parses wins
    /// (default: day-first, short year then long year)
    pub date_layouts: Vec<DateLayout>,

    /// How far a sender name may run before its colon
    /// (default: any run of non-colon characters)
    pub sender_rule: SenderRule,

    /// Message bodies that drop an entry on exact match
    /// (default: `POLL:` and `This message was deleted`)
    pub placeholders: Vec<String>,

    /// Drop chat-system notices after classification (default: false)
    pub skip_system_messages: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_layouts: DateLayout::day_first().to_vec(),
            sender_rule: SenderRule::default(),
            placeholders: vec![
                POLL_PLACEHOLDER.to_string(),
                DELETED_PLACEHOLDER.to_string(),
            ],
            skip_system_messages: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Day-first layouts, then month-first layouts for dates that can't be
    /// read day-first (e.g. `02/13/23`).
    pub fn month_first_fallback() -> Self {
        let mut layouts = DateLayout::day_first().to_vec();
        layouts.extend_from_slice(DateLayout::month_first());
        Self::default().with_date_layouts(layouts)
    }

    /// Month-first layouts only, for US-locale exports.
    pub fn month_first() -> Self {
        Self::default().with_date_layouts(DateLayout::month_first().to_vec())
    }

    /// Replaces the ordered list of accepted date layouts.
    #[must_use]
    pub fn with_date_layouts(mut self, layouts: Vec<DateLayout>) -> Self {
        self.date_layouts = layouts;
        self
    }

    /// Sets the sender rule.
    #[must_use]
    pub fn with_sender_rule(mut self, rule: SenderRule) -> Self {
        self.sender_rule = rule;
        self
    }

    /// Adds a placeholder body to drop.
    #[must_use]
    pub fn with_placeholder(mut self, body: impl Into<String>) -> Self {
        self.placeholders.push(body.into());
        self
    }

    /// Sets whether to drop chat-system notices.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Returns `true` if `message` is exactly one of the placeholder bodies.
    pub fn is_placeholder(&self, message: &str) -> bool {
        self.placeholders.iter().any(|p| p == message)
    }
}

/// Configuration for output writers.
///
/// The column set is fixed; this only controls presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV field delimiter (default: `,`)
    pub delimiter: u8,

    /// Pretty-print JSON arrays (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            pretty: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
