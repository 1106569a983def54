//! Run command implementation.
//!
//! The run command:
//! 1. Executes a built-in scenario under a capture session
//! 2. Reads back the sink the session produced
//! 3. Reconstructs and renders the call tree
//! 4. Optionally checks the listing against the scenario's expected output

use crate::capture::{CaptureSession, FileEmitter};
use crate::output::{write_report, TraceReport};
use crate::parser::read_trace_file;
use crate::reconstruct::{build_call_tree, render_tree};
use crate::scenarios::{self, ScenarioState};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Name of the built-in scenario to run
    pub scenario: String,

    /// Where the capture session persists its records
    pub sink: PathBuf,

    /// Compare the rendered listing against the scenario's expected listing
    pub check: bool,

    /// Print the listing to stdout
    pub print_listing: bool,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            scenario: String::new(),
            sink: PathBuf::from(crate::utils::config::DEFAULT_SINK_PATH),
            check: false,
            print_listing: true,
            output_json: None,
        }
    }
}

/// Validate run arguments
pub fn validate_run_args(args: &RunArgs) -> Result<()> {
    if args.scenario.is_empty() {
        anyhow::bail!("Scenario name cannot be empty");
    }

    if args.sink.as_os_str().is_empty() {
        anyhow::bail!("Sink path cannot be empty");
    }

    Ok(())
}

/// Execute the run command
///
/// # Errors
/// * Unknown scenario name
/// * Capture, parse, or output failures
/// * Listing mismatch when `check` is set
pub fn execute_run(args: RunArgs) -> Result<()> {
    let scenario = scenarios::find(&args.scenario).with_context(|| {
        let known: Vec<&str> = scenarios::all().iter().map(|s| s.name()).collect();
        format!(
            "Unknown scenario {:?} (available: {})",
            args.scenario,
            known.join(", ")
        )
    })?;

    info!("Running scenario: {}", scenario.name());

    // Step 1: Run the call chain under a capture session
    info!("Step 1/4: Capturing trace...");
    let mut state = ScenarioState::new();
    let mut session = CaptureSession::begin(FileEmitter::new(), &args.sink)
        .context("Failed to begin capture session")?;
    scenario.run(session.emitter(), &mut state);
    let sink = session.finish().context("Failed to finish capture session")?;

    debug!("Scenario completed {} leaf calls", state.leaf_calls);

    // Step 2: Read the sink back
    info!("Step 2/4: Reading trace records...");
    let records = read_trace_file(&sink)
        .with_context(|| format!("Failed to read trace sink {}", sink.display()))?;

    // Step 3: Reconstruct
    info!("Step 3/4: Reconstructing call tree...");
    let tree = build_call_tree(&records);
    let listing = render_tree(&tree);

    // Step 4: Outputs and conformance check
    info!("Step 4/4: Writing output...");

    if args.print_listing {
        print!("{listing}");
    }

    if let Some(json_path) = &args.output_json {
        let report = TraceReport::from_tree(&tree, &sink);
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("Report written to: {}", json_path.display());
    }

    if args.check {
        let expected = scenario.expected_listing();
        if listing != expected {
            anyhow::bail!(
                "Listing mismatch for scenario {}\nexpected:\n{}actual:\n{}",
                scenario.name(),
                expected,
                listing
            );
        }
        info!("✓ Listing matches expected output");
    }

    Ok(())
}
