//! Method Trace Studio CLI
//!
//! Reconstructs nested call trees from persisted method-trace record files
//! and runs the built-in conformance scenarios that produce them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use method_trace_studio::commands::{
    execute_render, execute_run, validate_render_args, validate_run_args, RenderArgs, RunArgs,
};
use method_trace_studio::output::read_report;
use method_trace_studio::scenarios;
use method_trace_studio::utils::config::{DEFAULT_SINK_PATH, SCHEMA_VERSION};

/// Method Trace Studio - call-tree reconstruction for method traces
#[derive(Parser, Debug)]
#[command(name = "method-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconstruct and render a persisted record file
    Render {
        /// Path to the record file
        #[arg(short, long, default_value = DEFAULT_SINK_PATH)]
        input: PathBuf,

        /// Output path for the text listing (optional)
        #[arg(short, long)]
        text: Option<PathBuf>,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Do not print the listing to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run a built-in scenario under trace capture and render its tree
    Run {
        /// Scenario name (see `scenarios`)
        #[arg(short, long)]
        scenario: String,

        /// Where to persist the captured records
        #[arg(long, default_value = DEFAULT_SINK_PATH)]
        sink: PathBuf,

        /// Fail unless the listing matches the scenario's expected output
        #[arg(long)]
        check: bool,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Do not print the listing to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the built-in scenarios
    Scenarios,

    /// Validate an exported JSON report
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            text,
            json,
            quiet,
        } => {
            let args = RenderArgs {
                input,
                print_listing: !quiet,
                output_text: text,
                output_json: json,
            };

            validate_render_args(&args)?;
            execute_render(args)?;
        }

        Commands::Run {
            scenario,
            sink,
            check,
            json,
            quiet,
        } => {
            let args = RunArgs {
                scenario,
                sink,
                check,
                print_listing: !quiet,
                output_json: json,
            };

            validate_run_args(&args)?;
            execute_run(args)?;
        }

        Commands::Scenarios => {
            list_scenarios();
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// List the built-in scenarios with their descriptions
fn list_scenarios() {
    println!("Built-in scenarios:");
    for scenario in scenarios::all() {
        println!("  {:<26} {}", scenario.name(), scenario.description());
    }
}

/// Validate a report JSON file
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source:  {}", report.source);
    println!("  Frames:  {}", report.frame_count);
    println!("  Roots:   {}", report.roots.len());

    Ok(())
}

/// Display version information
fn display_version() {
    println!("Method Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Call-tree reconstruction for VM method-tracing instrumentation.");
}
