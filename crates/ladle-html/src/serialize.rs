//! Turning a tree back into markup.

use ladle_dom::{DomTree, ElementData, NodeId, NodeType};
use strum_macros::{Display, EnumString};

use crate::parser::rules::{is_raw_text_element, is_void_element};
use crate::tokenizer::{escape_attr, escape_html};

/// Attributes whose presence alone carries meaning.
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "ismap",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
    "truespeed",
];

const XHTML_DOCTYPE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
     \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">";

/// Markup dialect produced by [`serialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Structure preserving output; empty values become bare names.
    #[default]
    Default,
    /// Unquote values where safe.
    Minimal,
    /// Always emit `<!DOCTYPE html>`.
    Html5,
    /// `name="name"` booleans, ` />` endings and the XHTML 1.0 Strict doctype.
    Xhtml,
}

/// Options for [`serialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Output dialect.
    pub format: OutputFormat,
    /// Close empty non-void elements with ` />`. Defaults to on for XHTML only.
    pub self_closing_tags: Option<bool>,
}

impl SerializeOptions {
    /// Options for the given format.
    #[must_use]
    pub const fn format(format: OutputFormat) -> Self {
        Self {
            format,
            self_closing_tags: None,
        }
    }

    /// Force self-closing of empty elements on or off.
    #[must_use]
    pub const fn with_self_closing_tags(mut self, enabled: bool) -> Self {
        self.self_closing_tags = Some(enabled);
        self
    }
}

/// Serialize the node `id` and everything below it.
#[must_use]
pub fn serialize(tree: &DomTree, id: NodeId, options: &SerializeOptions) -> String {
    let mut out = String::new();
    write_node(tree, id, options, &mut out);
    out
}

/// Serialize the children of `id`, without the node itself.
#[must_use]
pub fn serialize_children(tree: &DomTree, id: NodeId, options: &SerializeOptions) -> String {
    let mut out = String::new();
    for &child in tree.children(id) {
        write_node(tree, child, options, &mut out);
    }
    out
}

fn write_node(tree: &DomTree, id: NodeId, options: &SerializeOptions, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => {
            for &child in tree.children(id) {
                write_node(tree, child, options, out);
            }
        }
        NodeType::Text(text) => {
            let raw = node
                .parent
                .and_then(|p| tree.tag_name(p))
                .is_some_and(is_raw_text_element);
            if raw {
                out.push_str(text);
            } else {
                out.push_str(&escape_html(text));
            }
        }
        NodeType::Comment(body) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
        NodeType::Doctype(body) => match options.format {
            OutputFormat::Html5 => out.push_str("<!DOCTYPE html>"),
            OutputFormat::Xhtml => out.push_str(XHTML_DOCTYPE),
            OutputFormat::Default | OutputFormat::Minimal => {
                out.push_str("<!DOCTYPE ");
                out.push_str(body);
                out.push('>');
            }
        },
        NodeType::Element(element) => write_element(tree, id, element, options, out),
    }
}

fn write_element(
    tree: &DomTree,
    id: NodeId,
    element: &ElementData,
    options: &SerializeOptions,
    out: &mut String,
) {
    let tag = element.tag_name.as_str();
    out.push('<');
    out.push_str(tag);
    for attr in element.attributes() {
        write_attribute(&attr.name, &attr.value, options.format, out);
    }

    if is_void_element(tag) {
        out.push_str(if options.format == OutputFormat::Xhtml {
            " />"
        } else {
            ">"
        });
        return;
    }

    let self_closing = options
        .self_closing_tags
        .unwrap_or(options.format == OutputFormat::Xhtml);
    let children = tree.children(id);
    if self_closing && children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for &child in children {
        write_node(tree, child, options, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attribute(name: &str, value: &str, format: OutputFormat, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    if value.is_empty() {
        if format == OutputFormat::Xhtml && BOOLEAN_ATTRIBUTES.contains(&name) {
            out.push_str("=\"");
            out.push_str(name);
            out.push('"');
        }
        return;
    }
    if format == OutputFormat::Minimal && !value.contains(needs_quotes) {
        out.push('=');
        out.push_str(value);
        return;
    }
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Characters that cannot appear in an unquoted attribute value.
const fn needs_quotes(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '`')
}
