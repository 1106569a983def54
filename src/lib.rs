//! Method Trace Studio
//!
//! Call-tree reconstruction for VM method-tracing instrumentation, plus the
//! conformance harness that exercises it.
//!
//! The tracing instrumentation records a flat, timestamp-ordered stream of
//! "method entered" / "method exited" events into a file sink; this crate
//! parses that stream, rebuilds the nested call tree, and renders it as an
//! indented listing or a versioned JSON report.
//!
//! This crate provides the core implementation for the
//! `method-trace` CLI tool.

pub mod capture;
pub mod commands;
pub mod output;
pub mod parser;
pub mod reconstruct;
pub mod scenarios;
pub mod utils;
