//! Terminal output: the colored tree and JSON match summaries.

use std::collections::BTreeMap;

use ladle::dom::{DomTree, NodeId, NodeType, SourceLocation};
use ladle::html::printer::visible_whitespace;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Maximum characters of text shown in a summary.
const SUMMARY_TEXT_LIMIT: usize = 200;

/// JSON view of one matched element.
#[derive(Debug, Serialize)]
pub struct NodeSummary<'a> {
    /// Arena index of the node.
    pub node: NodeId,
    /// Tag name.
    pub tag: &'a str,
    /// Attributes by name.
    pub attributes: BTreeMap<&'a str, &'a str>,
    /// Trimmed text content, shortened when long.
    pub text: String,
    /// Where the element started, when locations were recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl<'a> NodeSummary<'a> {
    /// Summarize `id`. Returns `None` for non-elements.
    #[must_use]
    pub fn new(tree: &'a DomTree, id: NodeId) -> Option<Self> {
        let element = tree.as_element(id)?;
        let text = tree.text_content(id);
        let text = text.trim();
        Some(Self {
            node: id,
            tag: &element.tag_name,
            attributes: element
                .attributes()
                .iter()
                .map(|attr| (attr.name.as_str(), attr.value.as_str()))
                .collect(),
            text: text.chars().take(SUMMARY_TEXT_LIMIT).collect(),
            location: tree.location(id),
        })
    }
}

/// Print the subtree at `id` with colors, optionally suffixed by locations.
pub fn print_tree(tree: &DomTree, id: NodeId, show_locations: bool) {
    let mut stack = vec![(id, 0usize)];
    while let Some((node_id, depth)) = stack.pop() {
        let Some(node) = tree.get(node_id) else {
            continue;
        };
        let prefix = "  ".repeat(depth);
        let line = match &node.node_type {
            NodeType::Document => "Document".bold().to_string(),
            NodeType::Element(data) => {
                let mut line = format!("{}{}", "<".dimmed(), data.tag_name.cyan().bold());
                for attr in data.attributes() {
                    line.push(' ');
                    line.push_str(&attr.name.yellow().to_string());
                    if !attr.value.is_empty() {
                        line.push_str(&format!("=\"{}\"", attr.value.green()));
                    }
                }
                line.push_str(&">".dimmed().to_string());
                line
            }
            NodeType::Text(text) => format!("\"{}\"", visible_whitespace(text)),
            NodeType::Comment(data) => format!("<!--{data}-->").bright_black().to_string(),
            NodeType::Doctype(data) => format!("<!DOCTYPE {data}>").magenta().to_string(),
        };
        match node.location.filter(|_| show_locations) {
            Some(location) => println!("{prefix}{line} {}", format!("@{location}").dimmed()),
            None => println!("{prefix}{line}"),
        }
        stack.extend(tree.children(node_id).iter().rev().map(|&c| (c, depth + 1)));
    }
}
