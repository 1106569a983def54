//! Render command implementation.
//!
//! The render command:
//! 1. Reads a persisted record sink
//! 2. Reconstructs the call tree
//! 3. Emits the listing and optional output files

use crate::output::{write_listing_file, write_report, TraceReport};
use crate::parser::read_trace_file;
use crate::reconstruct::{build_call_tree, render_tree};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the render command
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Path to the persisted record sink
    pub input: PathBuf,

    /// Print the listing to stdout
    pub print_listing: bool,

    /// Output path for the text listing (optional)
    pub output_text: Option<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(crate::utils::config::DEFAULT_SINK_PATH),
            print_listing: true,
            output_text: None,
            output_json: None,
        }
    }
}

/// Validate render arguments
///
/// Can be called before execute_render for early validation.
pub fn validate_render_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.print_listing && args.output_text.is_none() && args.output_json.is_none() {
        anyhow::bail!("Nothing to do: no listing, text output, or JSON output requested");
    }

    Ok(())
}

/// Execute the render command
///
/// # Errors
/// * Sink read or parse failures
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<()> {
    info!("Rendering trace from: {}", args.input.display());

    // Step 1: Read the record sink
    info!("Step 1/3: Reading trace records...");
    let records = read_trace_file(&args.input)
        .with_context(|| format!("Failed to read trace sink {}", args.input.display()))?;

    debug!("Read {} records", records.len());

    // Step 2: Reconstruct the call tree
    info!("Step 2/3: Reconstructing call tree...");
    let tree = build_call_tree(&records);

    debug!("Reconstructed {} frames", tree.frame_count());

    // Step 3: Emit outputs
    info!("Step 3/3: Writing output...");

    if args.print_listing {
        print!("{}", render_tree(&tree));
    }

    if let Some(text_path) = &args.output_text {
        write_listing_file(&tree, text_path).context("Failed to write text listing")?;
        info!("Listing written to: {}", text_path.display());
    }

    if let Some(json_path) = &args.output_json {
        let report = TraceReport::from_tree(&tree, &args.input);
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("Report written to: {}", json_path.display());
    }

    Ok(())
}
