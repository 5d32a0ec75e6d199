//! Entry header grammar and date/time normalization.
//!
//! An entry header looks like one of:
//!
//! ```text
//! 01/02/23, 9:05 AM - Alice: Hello there
//! 01/02/2023, 22:10 – Bob left the group
//! 1/2/23, 9:05\u{202f}PM - Carol: hi
//! ```
//!
//! A date token (`d/m/yy` or `d/m/yyyy`), a comma and a space, a time token
//! (`H:MM`), an optional meridiem marker, then a plain hyphen or an en-dash
//! surrounded by spaces. Exports from some phones put invisible directional
//! marks or narrow no-break spaces in front of the meridiem, so the grammar
//! skips any run of whitespace and non-ASCII marks there.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Header grammar, anchored to line starts.
///
/// Groups: `date`, `time`, and the optional `meridiem`. The year width is
/// checked when the date is read, see [`normalize_date`].
pub const HEADER_PATTERN: &str = r"(?m)^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),\s(?P<time>\d{1,2}:\d{2})(?:\s*[^\x00-\x7F]*?(?P<meridiem>[AaPp][Mm]))?\s[-–]\s";

pub(crate) static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern compiles"));

/// AM/PM marker captured from a 12-hour header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parses a captured marker, ignoring case.
    pub fn parse(marker: &str) -> Option<Self> {
        if marker.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if marker.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// Raw header fields, borrowed from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    /// Date token exactly as written, e.g. `01/02/23`.
    pub date: &'a str,
    /// Time token exactly as written, e.g. `9:05`.
    pub time: &'a str,
    /// Meridiem marker, when the export uses 12-hour clock.
    pub meridiem: Option<Meridiem>,
}

/// One accepted way of reading a date token.
///
/// Exports don't say whether they are day-first or month-first, so the
/// parser tries an ordered list of layouts and the first one that yields a
/// real calendar date wins. Any date whose day is 12 or lower reads validly
/// both ways; the layout order decides which reading is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateLayout {
    /// `dd/mm/yy`
    DayMonthShortYear,
    /// `dd/mm/yyyy`
    DayMonthLongYear,
    /// `mm/dd/yy`
    MonthDayShortYear,
    /// `mm/dd/yyyy`
    MonthDayLongYear,
}

impl DateLayout {
    /// Returns the chrono format string for this layout.
    pub fn chrono_format(self) -> &'static str {
        match self {
            DateLayout::DayMonthShortYear => "%d/%m/%y",
            DateLayout::DayMonthLongYear => "%d/%m/%Y",
            DateLayout::MonthDayShortYear => "%m/%d/%y",
            DateLayout::MonthDayLongYear => "%m/%d/%Y",
        }
    }

    /// Number of digits the year token must have.
    pub fn year_digits(self) -> usize {
        match self {
            DateLayout::DayMonthShortYear | DateLayout::MonthDayShortYear => 2,
            DateLayout::DayMonthLongYear | DateLayout::MonthDayLongYear => 4,
        }
    }

    /// Day-first layouts, short year before long year.
    pub fn day_first() -> &'static [DateLayout] {
        &[DateLayout::DayMonthShortYear, DateLayout::DayMonthLongYear]
    }

    /// Month-first layouts, short year before long year.
    pub fn month_first() -> &'static [DateLayout] {
        &[DateLayout::MonthDayShortYear, DateLayout::MonthDayLongYear]
    }
}

/// Reads a date token with the first layout that accepts it.
///
/// A layout only applies when the year token has exactly its width, so a
/// three-digit year is never read. Returns `None` when no layout yields a
/// valid calendar date.
pub fn normalize_date(token: &str, layouts: &[DateLayout]) -> Option<NaiveDate> {
    let year_len = token.rsplit('/').next().map_or(0, str::len);
    layouts
        .iter()
        .filter(|layout| layout.year_digits() == year_len)
        .find_map(|layout| NaiveDate::parse_from_str(token, layout.chrono_format()).ok())
}

/// Reads a time token into a canonical clock time.
///
/// With a meridiem the token is read as 12-hour time (`13:00 PM` fails),
/// otherwise as 24-hour time (`24:00` fails).
pub fn normalize_time(token: &str, meridiem: Option<Meridiem>) -> Option<NaiveTime> {
    match meridiem {
        Some(m) => {
            NaiveTime::parse_from_str(&format!("{token} {}", m.as_str()), "%I:%M %p").ok()
        }
        None => NaiveTime::parse_from_str(token, "%H:%M").ok(),
    }
}

/// Formats a clock time as `HH:MM`.
pub fn format_24h(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats a clock time as `hh:MM AM`/`hh:MM PM`.
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Extracts header fields from a regex match.
pub(crate) fn fields_from_captures<'a>(caps: &regex::Captures<'a>) -> HeaderFields<'a> {
    HeaderFields {
        date: caps.name("date").map_or("", |m| m.as_str()),
        time: caps.name("time").map_or("", |m| m.as_str()),
        meridiem: caps
            .name("meridiem")
            .and_then(|m| Meridiem::parse(m.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn header(line: &str) -> Option<HeaderFields<'_>> {
        HEADER_RE
            .captures(line)
            .map(|caps| fields_from_captures(&caps))
    }

    #[test]
    fn test_header_12h() {
        let h = header("01/02/23, 9:05 AM - Alice: Hello there").unwrap();
        assert_eq!(h.date, "01/02/23");
        assert_eq!(h.time, "9:05");
        assert_eq!(h.meridiem, Some(Meridiem::Am));
    }

    #[test]
    fn test_header_24h_en_dash() {
        let h = header("01/02/2023, 22:10 – Bob left the group").unwrap();
        assert_eq!(h.date, "01/02/2023");
        assert_eq!(h.time, "22:10");
        assert_eq!(h.meridiem, None);
    }

    #[test]
    fn test_header_skips_invisible_marks_before_meridiem() {
        // narrow no-break space
        let h = header("01/02/23, 9:05\u{202f}pm - Alice: hi").unwrap();
        assert_eq!(h.meridiem, Some(Meridiem::Pm));

        // left-to-right mark
        let h = header("01/02/23, 9:05 \u{200e}PM - Alice: hi").unwrap();
        assert_eq!(h.meridiem, Some(Meridiem::Pm));
    }

    #[test]
    fn test_header_requires_separator() {
        assert!(header("01/02/23, 9:05 AM Alice: hi").is_none());
        assert!(header("01/02/23 9:05 - Alice: hi").is_none());
        assert!(header("[01/02/23, 9:05:00] Alice: hi").is_none());
    }

    #[test]
    fn test_header_anchored_to_line_start() {
        assert!(header("quoting 01/02/23, 9:05 - Alice: hi").is_none());
        assert!(header("first line\n01/02/23, 9:05 - Alice: hi").is_some());
    }

    #[test]
    fn test_normalize_date_day_first() {
        let d = normalize_date("01/02/23", DateLayout::day_first()).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());

        let d = normalize_date("15/01/2024", DateLayout::day_first()).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_normalize_date_rejects_out_of_range() {
        assert!(normalize_date("99/99/23", DateLayout::day_first()).is_none());
        assert!(normalize_date("31/02/23", DateLayout::day_first()).is_none());
        assert!(normalize_date("", DateLayout::day_first()).is_none());
    }

    #[test]
    fn test_normalize_date_year_width() {
        assert!(normalize_date("01/02/123", DateLayout::day_first()).is_none());
        assert!(normalize_date("01/02/123", DateLayout::month_first()).is_none());

        // a long-year layout alone never reads a two-digit year as year 23
        assert!(normalize_date("01/02/23", &[DateLayout::DayMonthLongYear]).is_none());
        assert_eq!(
            normalize_date("01/02/2023", &[DateLayout::DayMonthLongYear]),
            NaiveDate::from_ymd_opt(2023, 2, 1)
        );
    }

    #[test]
    fn test_normalize_date_layout_order_decides() {
        let mut layouts = DateLayout::day_first().to_vec();
        layouts.extend_from_slice(DateLayout::month_first());

        // unambiguous month-first date falls through to the fallback
        let d = normalize_date("02/13/23", &layouts).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 2, 13).unwrap());

        // ambiguous date keeps the first reading
        let d = normalize_date("03/04/23", &layouts).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 4, 3).unwrap());

        let d = normalize_date("03/04/23", DateLayout::month_first()).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 3, 4).unwrap());
    }

    #[test]
    fn test_normalize_time_12h() {
        let t = normalize_time("9:05", Some(Meridiem::Am)).unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 5));

        let t = normalize_time("12:30", Some(Meridiem::Am)).unwrap();
        assert_eq!(t.hour(), 0);

        let t = normalize_time("12:30", Some(Meridiem::Pm)).unwrap();
        assert_eq!(t.hour(), 12);

        let t = normalize_time("11:59", Some(Meridiem::Pm)).unwrap();
        assert_eq!(t.hour(), 23);
    }

    #[test]
    fn test_normalize_time_rejects_out_of_range() {
        assert!(normalize_time("13:00", Some(Meridiem::Pm)).is_none());
        assert!(normalize_time("0:30", Some(Meridiem::Am)).is_none());
        assert!(normalize_time("24:00", None).is_none());
        assert!(normalize_time("10:60", None).is_none());
    }

    #[test]
    fn test_format_both_clocks() {
        let t = NaiveTime::from_hms_opt(22, 10, 0).unwrap();
        assert_eq!(format_24h(t), "22:10");
        assert_eq!(format_12h(t), "10:10 PM");

        let t = NaiveTime::from_hms_opt(0, 7, 0).unwrap();
        assert_eq!(format_24h(t), "00:07");
        assert_eq!(format_12h(t), "12:07 AM");
    }
}
