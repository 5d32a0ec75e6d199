//! Working with parsed records.
//!
//! This module contains:
//! - [`table`] - the read-only [`ChatTable`]
//! - [`filter`] - narrowing a table by date and sender
//! - [`stats`] - headline counts
//! - [`classify`] - the per-message classifier hook
//! - [`output`] - format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatsift::core::{
//!     ChatStats, ChatTable, FilterConfig, MessageClassifier,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod classify;
pub mod filter;
pub mod output;
pub mod stats;
pub mod table;

pub use classify::MessageClassifier;
pub use filter::{FilterConfig, apply_filters};
pub use stats::ChatStats;
pub use table::ChatTable;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
