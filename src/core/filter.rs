//! Filter records by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for narrowing a [`ChatTable`].
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Records from one participant |
//! | Notices | [`with_system_notices`](FilterConfig::with_system_notices) | Chat-system notices only |
//!
//! # Example
//!
//! ```
//! use chatsift::core::filter::FilterConfig;
//! use chatsift::TranscriptParser;
//!
//! # fn main() -> chatsift::Result<()> {
//! let table = TranscriptParser::new().parse_str(
//!     "01/01/24, 10:00 - Alice: Old\n15/06/24, 10:00 - Alice: New\n15/06/24, 10:01 - Bob: Hi",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_sender("alice");
//!
//! let filtered = table.filter(&config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.records()[0].message(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive calendar days
//! - Sender matching is case-insensitive for ASCII characters and never
//!   crosses between participants and notices: `System` selects a
//!   participant of that name, the flat label `System:` selects notices
//! - Multiple filters are combined with AND logic
//! - Filtering copies: the source table is never modified

use chrono::NaiveDate;

use super::table::ChatTable;
use crate::error::ChatsiftError;
use crate::record::{MessageRecord, Sender};

/// Configuration for filtering records by date and sender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,

    /// Include only records from this sender (participant names compare
    /// case-insensitively).
    pub from: Option<Sender>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatsiftError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatsiftError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the sender filter from a flat `sender` value.
    ///
    /// See [`Sender::from_label`].
    #[must_use]
    pub fn with_sender(mut self, sender: &str) -> Self {
        self.from = Some(Sender::from_label(sender));
        self
    }

    /// Keeps chat-system notices only.
    #[must_use]
    pub fn with_system_notices(mut self) -> Self {
        self.from = Some(Sender::System);
        self
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if let Some(ref from) = self.from {
            let same = match (from, record.sender()) {
                (Sender::System, Sender::System) => true,
                (Sender::Participant(wanted), Sender::Participant(name)) => {
                    name.eq_ignore_ascii_case(wanted)
                }
                _ => false,
            };
            if !same {
                return false;
            }
        }
        if self.after.is_some_and(|after| record.date() < after) {
            return false;
        }
        if self.before.is_some_and(|before| record.date() > before) {
            return false;
        }
        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatsiftError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatsiftError::invalid_date(date_str))
}

/// Returns a new table containing only records that match all active filters.
pub fn apply_filters(table: &ChatTable, config: &FilterConfig) -> ChatTable {
    if !config.is_active() {
        return table.clone();
    }

    table
        .iter()
        .filter(|record| config.matches(record))
        .cloned()
        .collect()
}
