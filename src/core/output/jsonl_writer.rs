//! JSON Lines (JSONL) output writer.
//!
//! One record object per line, no enclosing array. Suited to line-oriented
//! tools and to appending several exports into one dataset.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::{ChatsiftError, Result};
use crate::record::MessageRecord;

/// Writes records to a JSONL file.
///
/// # Format
/// ```text
/// {"date":"2023-02-01","time_12h":"09:05 PM","time_24h":"21:05","sender":"Alice",...}
/// {"date":"2023-02-01","time_12h":"09:06 PM","time_24h":"21:06","sender":"Bob",...}
/// ```
///
/// Zero records produce an empty file. Lines are always compact, so no
/// [`OutputConfig`](crate::config::OutputConfig) is taken.
pub fn write_jsonl(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
///
/// Same format as [`write_jsonl`]. Each line ends with `\n`.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ChatsiftError::Utf8 {
        context: "JSONL output".into(),
        source: e,
    })
}

fn write_lines<W: Write>(records: &[MessageRecord], sink: &mut W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *sink, record)?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}
