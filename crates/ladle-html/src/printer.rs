//! Indented debug rendering of a tree.

use std::fmt::Write;

use ladle_dom::{DomTree, NodeId, NodeType};

/// Render the subtree at `id` one node per line, two spaces per level.
///
/// Text shows newlines as `\n` and spaces as `·` so whitespace-only nodes
/// stay visible.
#[must_use]
pub fn format_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    let mut stack = vec![(id, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        let Some(line) = describe_node(tree, node) else {
            continue;
        };
        let _ = writeln!(out, "{}{line}", "  ".repeat(depth));
        stack.extend(tree.children(node).iter().rev().map(|&c| (c, depth + 1)));
    }
    out
}

/// One-line description of a node, as used by [`format_tree`].
#[must_use]
pub fn describe_node(tree: &DomTree, id: NodeId) -> Option<String> {
    Some(match &tree.get(id)?.node_type {
        NodeType::Document => "Document".to_string(),
        NodeType::Element(data) => {
            let mut line = format!("<{}", data.tag_name);
            for attr in data.attributes() {
                if attr.value.is_empty() {
                    let _ = write!(line, " {}", attr.name);
                } else {
                    let _ = write!(line, " {}=\"{}\"", attr.name, attr.value);
                }
            }
            line.push('>');
            line
        }
        NodeType::Text(text) => format!("\"{}\"", visible_whitespace(text)),
        NodeType::Comment(data) => format!("<!--{data}-->"),
        NodeType::Doctype(data) => format!("<!DOCTYPE {data}>"),
    })
}

/// Make spaces and newlines visible.
#[must_use]
pub fn visible_whitespace(text: &str) -> String {
    text.replace('\n', "\\n").replace(' ', "\u{00B7}")
}
