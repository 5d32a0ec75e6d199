//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers every
//! caller-visible failure in the library.
//!
//! # What is *not* an error
//!
//! Malformed transcript *content* never surfaces here. A chunk with an
//! impossible date, an out-of-range time, or a placeholder body is dropped
//! and counted in [`ParseReport`](crate::parser::ParseReport). The only
//! content-level signal a caller sees is "zero records produced".

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::ChatTable;
///
/// fn load() -> Result<ChatTable> {
///     Ok(ChatTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input doesn't have the expected structure.
    ///
    /// This occurs when:
    /// - A transcript contains no recognizable entry header
    /// - An output path has an unknown extension
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A parser or output configuration can't be used.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatsiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsiftError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates the error reported for text without a single entry header.
    pub fn not_a_transcript() -> Self {
        Self::invalid_format(
            "chat export",
            "no entry header found. Make sure the file is an exported chat transcript.",
        )
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatsiftError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatsiftError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatsiftError::InvalidDate { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatsiftError::InvalidConfig { .. })
    }
}
