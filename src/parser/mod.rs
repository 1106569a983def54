//! Trace record parsing.
//!
//! This module handles:
//! - The wire record model (timestamp + ENTER/EXIT kind)
//! - Parsing newline-delimited records from any reader
//! - Reading a persisted record sink from disk

pub mod record;

// Re-export main types
pub use record::{parse_line, parse_records, read_trace_file, RecordKind, TraceRecord};
