//! Headline counts over a record table.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::record::MessageRecord;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[^\s<>]+").expect("url pattern compiles")
});

/// Message, word, media and link counts.
///
/// # Example
///
/// ```rust
/// use chatsift::TranscriptParser;
/// use chatsift::core::ChatStats;
///
/// let table = TranscriptParser::new().parse_str(
///     "01/02/23, 10:00 - Alice: see https://example.com now\n\
///      01/02/23, 10:01 - Bob: <Media omitted>",
/// );
///
/// let stats = ChatStats::from_records(table.records());
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.links, 1);
/// assert_eq!(stats.media, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    pub messages: usize,
    /// Whitespace-separated words across all bodies.
    pub words: usize,
    /// Bodies equal to the omitted-media marker.
    pub media: usize,
    pub links: usize,
}

impl ChatStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MessageRecord>,
    {
        records
            .into_iter()
            .fold(ChatStats::default(), |mut stats, record| {
                stats.messages += 1;
                stats.words += record.message().split_whitespace().count();
                stats.media += usize::from(record.is_media());
                stats.links += URL_RE.find_iter(record.message()).count();
                stats
            })
    }

    /// Average words per message; `0.0` for an empty table.
    pub fn words_per_message(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        self.words as f64 / self.messages as f64
    }
}
