//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Indentation unit for rendered call listings, one per nesting level
pub const INDENT_UNIT: &str = "  ";

/// Record name that marks an EXIT event on the wire
pub const EXIT_TOKEN: &str = "POP";

/// Separator between the timestamp and the name in a wire record
pub const RECORD_SEPARATOR: char = ':';

/// Default path for the persisted record sink written by a capture session
pub const DEFAULT_SINK_PATH: &str = "trace.out";
