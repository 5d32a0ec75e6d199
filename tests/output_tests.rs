//! Tests for output writers (CSV, JSON, JSONL)

use chatsift::config::OutputConfig;
use chatsift::core::output::{to_csv, write_csv, write_json, write_jsonl};
use chatsift::format::{OutputFormat, to_format_string, write_to_format};
use chatsift::record::COLUMNS;
use chatsift::core::FilterConfig;
use chatsift::{ChatTable, Sender, TranscriptParser};
use std::fs;
use tempfile::tempdir;

fn sample_table() -> ChatTable {
    TranscriptParser::new().parse_str(
        "01/02/23, 9:05 AM - Alice: Hello, \"world\"\n\
         01/02/23, 9:06 AM - Bob: two\nlines\n\
         01/02/23, 22:10 - Bob left the group\n\
         01/02/23, 23:59 - Carol: <Media omitted>",
    )
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_csv_round_trips_through_reader() {
    let table = sample_table();
    let csv = to_csv(table.records(), &OutputConfig::new()).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 4);

    assert_eq!(&rows[0][0], "2023-02-01");
    assert_eq!(&rows[0][1], "09:05 AM");
    assert_eq!(&rows[0][2], "09:05");
    assert_eq!(&rows[0][3], "Alice");
    assert_eq!(&rows[0][4], "Hello, \"world\"");
    assert_eq!(&rows[0][6], "February");
    assert_eq!(&rows[0][10], "Wednesday");
    assert_eq!(&rows[0][13], "9-10");

    assert_eq!(&rows[1][4], "two\nlines");
    assert_eq!(&rows[2][3], "System:");
    assert_eq!(&rows[3][4], "<Media omitted>");
    assert_eq!(&rows[3][13], "23-00");
}

#[test]
fn test_csv_empty_table_has_header_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    write_csv(&[], path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert_eq!(content.trim_end(), COLUMNS.join(","));
}

#[test]
fn test_csv_semicolon_delimiter() {
    let table = sample_table();
    let config = OutputConfig::new().with_delimiter(b';');
    let csv = to_csv(table.records(), &config).unwrap();

    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(csv.as_bytes());
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(&first[4], "Hello, \"world\"");
    assert!(csv.lines().next().unwrap().starts_with("date;time_12h;"));
}

// ============================================================================
// JSON / JSONL
// ============================================================================

#[test]
fn test_json_keys_in_column_order() {
    let table = sample_table();
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    write_json(table.records(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 4);

    let first = &array[0];
    assert_eq!(first["date"], "2023-02-01");
    assert_eq!(first["year"], 2023);
    assert_eq!(first["month_num"], 2);
    assert_eq!(first["hour"], 9);
    assert_eq!(first["minute"], 5);
    assert_eq!(first["date_only"], "2023-02-01");

    let positions: Vec<usize> = COLUMNS
        .iter()
        .map(|c| content.find(&format!("\"{c}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_jsonl_lines_match_records() {
    let table = sample_table();
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.jsonl");

    write_jsonl(table.records(), path.to_str().unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let senders: Vec<String> = content
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["sender"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(senders, vec!["Alice", "Bob", "System:", "Carol"]);
}

#[test]
fn test_notice_and_participant_named_system_stay_apart() {
    let table = TranscriptParser::new()
        .parse_str("01/02/23, 10:00 - System: I am a person\n01/02/23, 10:01 - Bob left the group\n");
    let config = OutputConfig::new();

    let csv = to_csv(table.records(), &config).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let senders: Vec<String> = reader.records().map(|row| row.unwrap()[3].to_string()).collect();
    assert_eq!(senders, vec!["System", "System:"]);

    let json = to_format_string(table.records(), OutputFormat::Json, &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_ne!(value[0]["sender"], value[1]["sender"]);

    // the flat value reads back as the sender it was written from
    for record in table.iter() {
        assert_eq!(Sender::from_label(record.sender().as_str()), *record.sender());
    }

    let people = table.filter(&FilterConfig::new().with_sender("System"));
    assert_eq!(people.len(), 1);
    assert_eq!(people.records()[0].message(), "I am a person");

    let notices = table.filter(&FilterConfig::new().with_sender(Sender::SYSTEM_LABEL));
    assert_eq!(notices.len(), 1);
    assert_eq!(notices.records()[0].message(), "Bob left the group");
}

#[test]
fn test_empty_outputs_are_well_formed() {
    let config = OutputConfig::new();
    let json = to_format_string(&[], OutputFormat::Json, &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!([]));

    assert!(to_format_string(&[], OutputFormat::Jsonl, &config).unwrap().is_empty());
}

// ============================================================================
// Format dispatch
// ============================================================================

#[test]
fn test_write_to_format_by_extension() {
    let table = sample_table();
    let dir = tempdir().unwrap();
    let config = OutputConfig::new();

    for name in ["a.csv", "a.json", "a.jsonl"] {
        let path = dir.path().join(name);
        let format = OutputFormat::from_path(&path).unwrap();
        write_to_format(table.records(), path.to_str().unwrap(), format, &config).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0, "{name}");
    }
}

#[test]
fn test_write_to_unwritable_path() {
    let err = write_to_format(
        sample_table().records(),
        "/definitely/not/a/dir/out.csv",
        OutputFormat::Csv,
        &OutputConfig::new(),
    )
    .unwrap_err();
    assert!(err.is_io());
}
