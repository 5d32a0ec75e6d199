//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"date": "2023-02-01", "time_12h": "09:05 PM", "time_24h": "21:05", "sender": "Alice", ...}
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
///
/// Pretty-printed unless [`OutputConfig::pretty`] is off.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
