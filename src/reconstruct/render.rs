//! Render a call tree as an indented text listing.
//!
//! One line per frame, prefixed by two spaces per nesting level, in original
//! ENTER order. Rendering is a pure traversal: the same tree always produces
//! the same listing.

use super::tree_builder::{build_call_tree, CallFrame, CallTree};
use crate::parser::TraceRecord;
use crate::utils::config::INDENT_UNIT;
use std::io::{self, Write};

/// Render a call tree to a string
pub fn render_tree(tree: &CallTree) -> String {
    let mut out = String::new();
    for root in &tree.roots {
        render_frame(root, 0, &mut out);
    }
    out
}

/// Write the rendered listing to any writer
///
/// Same contract as [`render_tree`], without building the intermediate
/// string.
pub fn write_listing<W: Write>(tree: &CallTree, writer: &mut W) -> io::Result<()> {
    for root in &tree.roots {
        write_frame(root, 0, writer)?;
    }
    Ok(())
}

/// Reconstruct and render in one call
pub fn reconstruct_listing(records: &[TraceRecord]) -> String {
    render_tree(&build_call_tree(records))
}

fn render_frame(frame: &CallFrame, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT_UNIT);
    }
    out.push_str(&frame.name);
    out.push('\n');

    for child in &frame.children {
        render_frame(child, depth + 1, out);
    }
}

fn write_frame<W: Write>(frame: &CallFrame, depth: usize, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}{}", INDENT_UNIT.repeat(depth), frame.name)?;

    for child in &frame.children {
        write_frame(child, depth + 1, writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TraceRecord;
    use pretty_assertions::assert_eq;

    fn enter(name: &str) -> TraceRecord {
        TraceRecord::enter("0", name)
    }

    fn exit() -> TraceRecord {
        TraceRecord::exit("0")
    }

    #[test]
    fn test_render_nested_pair() {
        let listing = reconstruct_listing(&[enter("a"), enter("b"), exit(), exit()]);
        assert_eq!(listing, "a\n  b\n");
    }

    #[test]
    fn test_render_depth_grows_by_one_unit() {
        let listing = reconstruct_listing(&[enter("a"), enter("b"), enter("c")]);
        assert_eq!(listing, "a\n  b\n    c\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let tree = build_call_tree(&[enter("a"), enter("b"), exit(), enter("c")]);

        assert_eq!(render_tree(&tree), render_tree(&tree));
    }

    #[test]
    fn test_write_listing_matches_render() {
        let tree = build_call_tree(&[enter("a"), enter("b"), exit(), exit(), enter("c")]);

        let mut buf = Vec::new();
        write_listing(&tree, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), render_tree(&tree));
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(render_tree(&CallTree::default()), "");
    }
}
