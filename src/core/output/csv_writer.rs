//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::config::OutputConfig;
use crate::error::{ChatsiftError, Result};
use crate::record::{COLUMNS, MessageRecord};

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: from [`OutputConfig::delimiter`] (default `,`)
/// - Header: always written, even for zero records
/// - Columns: `date`, `time_12h`, `time_24h`, `sender`, `message`, `year`,
///   `month_name`, `day`, `hour`, `minute`, `day_name`, `month_num`,
///   `date_only`, `period_bucket`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|e| ChatsiftError::Utf8 {
        context: "CSV output".into(),
        source: e,
    })
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(sink);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build one CSV row, in [`COLUMNS`] order.
fn build_record(record: &MessageRecord) -> [String; 14] {
    [
        record.date().format("%Y-%m-%d").to_string(),
        record.time_12h().to_string(),
        record.time_24h_str(),
        record.sender().as_str().to_string(),
        record.message().to_string(),
        record.year().to_string(),
        record.month_name().to_string(),
        record.day().to_string(),
        record.hour().to_string(),
        record.minute().to_string(),
        record.day_name().to_string(),
        record.month_num().to_string(),
        record.date_only().format("%Y-%m-%d").to_string(),
        record.period_bucket().label().to_string(),
    ]
}
