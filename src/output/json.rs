//! JSON report output writer.
//!
//! Writes TraceReport structs to JSON files with proper formatting.

use super::prepare_output_path;
use super::schema::TraceReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a report to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &TraceReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a report from a JSON file
///
/// Used by the validate command and by tests to load a report back.
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<TraceReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: TraceReport = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} frames",
        report.version, report.frame_count
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconstruct::{CallFrame, CallTree};
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn create_test_report() -> TraceReport {
        let tree = CallTree {
            roots: vec![CallFrame {
                name: "a".to_string(),
                children: vec![CallFrame::new("b")],
            }],
        };
        TraceReport::from_tree(&tree, Path::new("trace.out"))
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&report, path).unwrap();

        let loaded = read_report(path).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.source, "trace.out");
        assert_eq!(loaded.frame_count, 2);
        assert_eq!(loaded.tree(), report.tree());
    }

    #[test]
    fn test_write_report_empty_path() {
        let report = create_test_report();
        let result = write_report(&report, Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_report_directory_path() {
        let report = create_test_report();
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_report(&report, temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        let report = create_test_report();
        write_report(&report, &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
