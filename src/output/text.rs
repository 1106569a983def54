//! Text listing output writer.

use super::prepare_output_path;
use crate::reconstruct::{write_listing, CallTree};
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write the rendered listing to a file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_listing_file(tree: &CallTree, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing listing to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    write_listing(tree, &mut writer).map_err(OutputError::WriteFailed)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TraceRecord;
    use crate::reconstruct::build_call_tree;

    #[test]
    fn test_write_listing_file() {
        let tree = build_call_tree(&[
            TraceRecord::enter("1", "a"),
            TraceRecord::enter("2", "b"),
            TraceRecord::exit("3"),
            TraceRecord::exit("4"),
        ]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.txt");

        write_listing_file(&tree, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n  b\n");
    }

    #[test]
    fn test_write_listing_file_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_listing_file(&CallTree::default(), dir.path());
        assert!(result.is_err());
    }
}
