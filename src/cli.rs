//! Command-line interface definition using clap.
//!
//! [`Args`] is the argument structure of the `chatsift` binary. It also knows
//! how to turn itself into the library's plain config types, so `main.rs`
//! stays a thin driver:
//!
//! ```rust
//! use chatsift::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::try_parse_from(["chatsift", "chat.txt", "--month-first", "-f", "json"]).unwrap();
//! assert_eq!(args.output_path(), "chat.json");
//! assert_eq!(args.parser_config().date_layouts.len(), 2);
//! ```

use std::path::Path;

use clap::Parser;

use crate::config::{OutputConfig, ParserConfig};
use crate::core::FilterConfig;
use crate::error::{ChatsiftError, Result};
use crate::format::OutputFormat;
use crate::parsing::SenderRule;

/// Turn an exported chat transcript into a table of message records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift chat.txt
    chatsift chat.txt -o messages.json
    chatsift chat.txt -f jsonl --after 2024-01-01 --before 2024-06-30
    chatsift us_export.txt --month-first --from Alice
    chatsift chat.txt --skip-system --delimiter ';'")]
pub struct Args {
    /// Path to the exported transcript (UTF-8 text)
    pub input: String,

    /// Path to output file [default: input name with the format's extension]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Read dates month-first (US exports)
    #[arg(long, conflicts_with = "date_fallback")]
    pub month_first: bool,

    /// Read dates day-first, falling back to month-first when that fails
    #[arg(long)]
    pub date_fallback: bool,

    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep records from this sender only (`System:` for notices)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Only read a sender name from the header line itself
    #[arg(long)]
    pub single_line_senders: bool,

    /// Drop chat-system notices (joins, leaves, subject changes)
    #[arg(long)]
    pub skip_system: bool,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Log dropped entries to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser configuration selected by the date flags.
    pub fn parser_config(&self) -> ParserConfig {
        let config = if self.month_first {
            ParserConfig::month_first()
        } else if self.date_fallback {
            ParserConfig::month_first_fallback()
        } else {
            ParserConfig::new()
        };
        let rule = if self.single_line_senders {
            SenderRule::SingleLine
        } else {
            SenderRule::AnyChars
        };
        config
            .with_sender_rule(rule)
            .with_skip_system_messages(self.skip_system)
    }

    /// Filter built from `--after`, `--before` and `--from`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`] for a malformed date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_sender(from);
        }
        Ok(filter)
    }

    /// Output configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidConfig`] if the delimiter isn't a
    /// single ASCII character.
    pub fn output_config(&self) -> Result<OutputConfig> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                ChatsiftError::invalid_config(format!(
                    "delimiter must be an ASCII character, got '{}'",
                    self.delimiter
                ))
            })?;
        Ok(OutputConfig::new()
            .with_delimiter(delimiter)
            .with_pretty(!self.compact))
    }

    /// Output path: `--output`, or the input path with the format's extension.
    pub fn output_path(&self) -> String {
        match self.output {
            Some(ref output) => output.clone(),
            None => Path::new(&self.input)
                .with_extension(self.format.extension())
                .to_string_lossy()
                .into_owned(),
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "chatsift=debug" } else { "warn" }
    }
}
