//! The parsed record table.
//!
//! A [`ChatTable`] is produced once by the parser and then read by every
//! consumer. It has no mutating methods: narrowing it down (by sender, by
//! date) returns a new table and leaves the source untouched.

use serde::Serialize;

use super::classify::MessageClassifier;
use super::filter::{FilterConfig, apply_filters};
use crate::record::{COLUMNS, MessageRecord};

/// An ordered, read-only table of message records.
///
/// The column set is [`COLUMNS`] regardless of how many rows there are,
/// including none.
///
/// # Example
///
/// ```rust
/// use chatsift::TranscriptParser;
///
/// let table = TranscriptParser::new().parse_str(
///     "01/02/23, 9:05 AM - Alice: Hello there\n01/02/23, 9:06 AM - Bob: Hi",
/// );
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.senders(), vec!["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatTable {
    records: Vec<MessageRecord>,
}

impl ChatTable {
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Column names, in output order.
    pub fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the table and returns its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }

    /// Returns a new table with the records matching `config`.
    pub fn filter(&self, config: &FilterConfig) -> ChatTable {
        apply_filters(self, config)
    }

    /// Distinct participant names in order of first appearance.
    ///
    /// System notices are not a participant and are left out.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if record.is_system() {
                continue;
            }
            let name = record.sender().as_str();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Runs `classifier` over every message body, in table order.
    pub fn classify<C: MessageClassifier + ?Sized>(&self, classifier: &C) -> Vec<C::Label> {
        self.records
            .iter()
            .map(|r| classifier.classify(r.message()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ChatTable {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MessageRecord> for ChatTable {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
