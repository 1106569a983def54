//! Output writers for reconstructed traces.
//!
//! This module handles writing data to disk in two formats:
//! - JSON reports (versioned schema, machine-readable tree)
//! - Text listings (the indented human-readable rendering)

pub mod json;
pub mod schema;
pub mod text;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use json::{read_report, write_report};
pub use schema::TraceReport;
pub use text::write_listing_file;

/// Validate an output path and create its parent directories.
///
/// Shared by the JSON and text writers.
pub(crate) fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
