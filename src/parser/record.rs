//! Wire format parser for persisted trace records.
//!
//! The emitter writes one record per line, either `<timestamp>:<name>` for
//! an ENTER event or `<timestamp>:POP` for an EXIT event. There is no header,
//! footer, or end-of-stream marker beyond end of input.
//!
//! The format has no escaping: records are split on the FIRST `:`, so a name
//! containing a newline cannot be represented, and everything after the first
//! separator (further colons included) is taken verbatim as the name. That is
//! a limitation of the wire format, not of this parser.

use crate::utils::config::{EXIT_TOKEN, RECORD_SEPARATOR};
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What kind of event a record describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// A method activation carrying the method name
    Enter(String),

    /// A method deactivation; always closes the most recently opened ENTER
    Exit,
}

/// One logical unit in the trace stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Opaque ordering token assigned by the emitter; stored, never interpreted
    pub timestamp: String,

    /// Event kind
    pub kind: RecordKind,
}

impl TraceRecord {
    /// Shorthand for an ENTER record
    pub fn enter(timestamp: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            kind: RecordKind::Enter(name.into()),
        }
    }

    /// Shorthand for an EXIT record
    pub fn exit(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            kind: RecordKind::Exit,
        }
    }
}

/// Parse a single wire record line
///
/// `line` is the 1-based position in the stream, used only for error reporting.
///
/// # Errors
/// * `ParseError::MissingSeparator` - the line has no `:` separator
pub fn parse_line(line: usize, text: &str) -> Result<TraceRecord, ParseError> {
    let Some((timestamp, name)) = text.split_once(RECORD_SEPARATOR) else {
        return Err(ParseError::MissingSeparator {
            line,
            text: text.to_string(),
        });
    };

    let kind = if name == EXIT_TOKEN {
        RecordKind::Exit
    } else {
        RecordKind::Enter(name.to_string())
    };

    Ok(TraceRecord {
        timestamp: timestamp.to_string(),
        kind,
    })
}

/// Parse a complete record stream from a reader
///
/// Performs a single forward pass; a trailing newline (the usual case for an
/// emitter that terminates every record) does not produce an empty record.
///
/// # Errors
/// * `ParseError::MissingSeparator` - a structurally malformed line aborts the pass
/// * `ParseError::Io` - the reader failed mid-stream
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>, ParseError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let text = line?;
        if text.is_empty() {
            continue;
        }
        records.push(parse_line(index + 1, &text)?);
    }

    debug!("Parsed {} trace records", records.len());

    Ok(records)
}

/// Read and parse a persisted record sink
///
/// The sink is opened for the duration of the pass and released whether or
/// not parsing completes.
///
/// # Errors
/// * `ParseError::Io` - the sink cannot be opened or read
/// * `ParseError::MissingSeparator` - the sink contains a malformed record
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<TraceRecord>, ParseError> {
    let path = path.as_ref();

    debug!("Reading trace records from: {}", path.display());

    let file = File::open(path)?;
    parse_records(BufReader::new(file))
}
