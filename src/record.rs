//! The canonical message record and its derived attributes.
//!
//! A [`MessageRecord`] is built once per surviving transcript entry. All
//! calendar and clock attributes are derived from a single date and a single
//! clock time at construction, so the 12-hour and 24-hour renderings can
//! never disagree. Records are immutable: fields are private and exposed
//! through accessors only.
//!
//! # Example
//!
//! ```
//! use chatsift::{MessageRecord, Sender};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let record = MessageRecord::new(
//!     NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
//!     NaiveTime::from_hms_opt(21, 5, 0).unwrap(),
//!     Sender::participant("Alice"),
//!     "Hello there",
//! );
//!
//! assert_eq!(record.time_24h_str(), "21:05");
//! assert_eq!(record.time_12h(), "09:05 PM");
//! assert_eq!(record.day_name(), "Wednesday");
//! assert_eq!(record.period_bucket().label(), "21-22");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::parsing::header::{format_12h, format_24h};

/// Output column names, in their fixed order.
pub const COLUMNS: [&str; 14] = [
    "date",
    "time_12h",
    "time_24h",
    "sender",
    "message",
    "year",
    "month_name",
    "day",
    "hour",
    "minute",
    "day_name",
    "month_num",
    "date_only",
    "period_bucket",
];

/// Body of an entry whose media attachment was left out of the export.
///
/// Kept verbatim as the message text so consumers can count media.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

const PERIOD_LABELS: [&str; 24] = [
    "00-1", "1-2", "2-3", "3-4", "4-5", "5-6", "6-7", "7-8", "8-9", "9-10", "10-11", "11-12",
    "12-13", "13-14", "14-15", "15-16", "16-17", "17-18", "18-19", "19-20", "20-21", "21-22",
    "22-23", "23-00",
];

/// Who authored an entry.
///
/// System notices (membership changes, encryption banners, ...) have no
/// human author and are represented by [`Sender::System`] rather than a
/// magic name, so a participant who happens to be called "System" is never
/// confused with a notice. In flat output a notice is written as
/// [`Sender::SYSTEM_LABEL`], which contains a colon and so can't be a
/// parsed sender name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A chat participant, as named in the export.
    Participant(String),
    /// A chat-system notice.
    System,
}

impl Sender {
    /// Label used for system notices in flat output.
    pub const SYSTEM_LABEL: &'static str = "System:";

    pub fn participant(name: impl Into<String>) -> Self {
        Sender::Participant(name.into())
    }

    /// Reads a flat `sender` value back: [`Sender::SYSTEM_LABEL`] (any case)
    /// is a notice, anything else a participant.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(Self::SYSTEM_LABEL) {
            Sender::System
        } else {
            Sender::participant(label)
        }
    }

    /// Returns `true` for chat-system notices.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }

    /// Participant name, or [`Sender::SYSTEM_LABEL`] for notices.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::Participant(name) => name,
            Sender::System => Self::SYSTEM_LABEL,
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One of the 24 one-hour buckets of a day.
///
/// Labels are fixed strings consumed by heatmap pivots: hour 0 is `"00-1"`,
/// hour 23 is `"23-00"`, and every other hour `h` is `"h-h+1"` without zero
/// padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourBucket(u8);

impl HourBucket {
    /// Returns the bucket for `hour`, or `None` if `hour > 23`.
    pub fn from_hour(hour: u32) -> Option<Self> {
        (hour < 24).then(|| HourBucket(hour as u8))
    }

    /// Returns the bucket containing `time`.
    pub fn from_time(time: NaiveTime) -> Self {
        HourBucket(time.hour() as u8)
    }

    /// First hour covered by this bucket.
    pub fn hour(self) -> u32 {
        u32::from(self.0)
    }

    pub fn label(self) -> &'static str {
        PERIOD_LABELS[usize::from(self.0)]
    }

    /// All labels, in hour order.
    pub fn labels() -> &'static [&'static str; 24] {
        &PERIOD_LABELS
    }

    /// All buckets, in hour order.
    pub fn all() -> impl Iterator<Item = HourBucket> {
        (0u8..24).map(HourBucket)
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

fn serialize_hm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}

/// A single parsed transcript entry.
///
/// Serializes to one flat object whose keys are [`COLUMNS`], in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    date: NaiveDate,
    time_12h: String,
    #[serde(serialize_with = "serialize_hm")]
    time_24h: NaiveTime,
    sender: Sender,
    message: String,
    year: i32,
    month_name: String,
    day: u32,
    hour: u32,
    minute: u32,
    day_name: String,
    month_num: u32,
    date_only: NaiveDate,
    period_bucket: HourBucket,
}

impl MessageRecord {
    /// Builds a record and derives every calendar and clock attribute.
    ///
    /// Seconds are dropped from `time`: transcripts carry minute precision.
    /// `message` is stored trimmed.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        sender: Sender,
        message: impl Into<String>,
    ) -> Self {
        let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
        let message: String = message.into();
        let message = if message.trim().len() == message.len() {
            message
        } else {
            message.trim().to_string()
        };

        Self {
            date,
            time_12h: format_12h(time),
            time_24h: time,
            sender,
            message,
            year: date.year(),
            month_name: date.format("%B").to_string(),
            day: date.day(),
            hour: time.hour(),
            minute: time.minute(),
            day_name: date.format("%A").to_string(),
            month_num: date.month(),
            date_only: date,
            period_bucket: HourBucket::from_time(time),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Clock time as `hh:MM AM`/`hh:MM PM`.
    pub fn time_12h(&self) -> &str {
        &self.time_12h
    }

    pub fn time_24h(&self) -> NaiveTime {
        self.time_24h
    }

    /// Clock time as `HH:MM`.
    pub fn time_24h_str(&self) -> String {
        format_24h(self.time_24h)
    }

    /// Date and clock time combined.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time_24h)
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// English month name, e.g. `"February"`.
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// English weekday name, e.g. `"Wednesday"`.
    pub fn day_name(&self) -> &str {
        &self.day_name
    }

    /// Month number, 1-based.
    pub fn month_num(&self) -> u32 {
        self.month_num
    }

    pub fn date_only(&self) -> NaiveDate {
        self.date_only
    }

    pub fn period_bucket(&self) -> HourBucket {
        self.period_bucket
    }

    /// Returns `true` if the body is the omitted-media marker.
    pub fn is_media(&self) -> bool {
        self.message == MEDIA_OMITTED
    }

    /// Returns `true` if this entry is a chat-system notice.
    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }
}
