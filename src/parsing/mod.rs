//! Transcript segmentation and entry-level parsing.
//!
//! This module contains the pieces the [`TranscriptParser`](crate::parser::TranscriptParser)
//! is assembled from:
//! - [`header`] - header grammar, date layouts, date/time normalization
//! - [`segmenter`] - cuts a transcript into one raw chunk per entry
//! - [`body`] - splits an entry body into sender and message

pub mod body;
pub mod header;
pub mod segmenter;

// Re-export commonly used items
pub use body::{Classified, SenderRule, classify_body, classify_body_with};
pub use header::{DateLayout, HeaderFields, Meridiem, normalize_date, normalize_time};
pub use segmenter::{Chunks, RawChunk, Segmentation, chunks, has_header, segment};
