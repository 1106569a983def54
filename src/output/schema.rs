//! Output JSON schema definitions for reconstructed traces.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::reconstruct::{CallFrame, CallTree};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Record sink the report was reconstructed from
    pub source: String,

    /// Total number of frames across all roots
    pub frame_count: usize,

    /// The reconstructed call tree
    pub roots: Vec<CallFrame>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl TraceReport {
    /// Build a report from a reconstructed tree
    pub fn from_tree(tree: &CallTree, source: &Path) -> Self {
        use chrono::Utc;

        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.display().to_string(),
            frame_count: tree.frame_count(),
            roots: tree.roots.clone(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// The tree the report carries
    pub fn tree(&self) -> CallTree {
        CallTree {
            roots: self.roots.clone(),
        }
    }
}
