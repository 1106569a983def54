//! Reconstruction of a nested call tree from a flat record stream.
//!
//! This module transforms the parsed record sequence into:
//! - A `CallTree` of nested frames (the structured form)
//! - An indented text listing (the human-readable form)
//!
//! The two forms are interchangeable; rendering is a pure depth-first
//! traversal of the tree.

pub mod render;
pub mod tree_builder;

// Re-export main types and functions
pub use render::{reconstruct_listing, render_tree, write_listing};
pub use tree_builder::{build_call_tree, CallFrame, CallTree};
