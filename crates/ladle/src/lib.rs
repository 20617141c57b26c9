//! High-level document API for Ladle.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document** - a parsed tree with selector queries, text extraction and
//!   serialization in one place
//! - **Re-exports** - the component crates as [`dom`], [`html`] and
//!   [`select`]
//!
//! ```
//! use ladle::Document;
//!
//! let doc = Document::parse("<ul><li>One<li>Two<li>Three</ul>");
//! assert_eq!(doc.count("ul > li"), 3);
//! assert_eq!(doc.select_one("li:last-child").map(|li| doc.text(li)), Some("Three".to_string()));
//! ```

pub use ladle_common as common;
pub use ladle_dom as dom;
pub use ladle_html as html;
pub use ladle_select as select;

use ladle_dom::{DomTree, NodeId, TextOptions};
use ladle_html::{ParseOptions, SerializeOptions, parse, serialize};

/// A parsed HTML document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tree: DomTree,
}

impl Document {
    /// Parse with the default options.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self::parse_with_options(html, &ParseOptions::default())
    }

    /// Parse with explicit options.
    #[must_use]
    pub fn parse_with_options(html: &str, options: &ParseOptions) -> Self {
        Self {
            tree: parse(html, options),
        }
    }

    /// The underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The underlying tree, for mutation.
    pub const fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Give up the wrapper and keep the tree.
    #[must_use]
    pub fn into_tree(self) -> DomTree {
        self.tree
    }

    /// The document node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Every element matching `selector`, in document order.
    #[must_use]
    pub fn select(&self, selector: &str) -> Vec<NodeId> {
        ladle_select::select(&self.tree, self.root(), selector, None)
    }

    /// At most `limit` elements matching `selector`.
    #[must_use]
    pub fn select_with_limit(&self, selector: &str, limit: usize) -> Vec<NodeId> {
        ladle_select::select(&self.tree, self.root(), selector, Some(limit))
    }

    /// The first element matching `selector`.
    #[must_use]
    pub fn select_one(&self, selector: &str) -> Option<NodeId> {
        ladle_select::select_one(&self.tree, self.root(), selector)
    }

    /// Whether anything matches `selector`.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.select_one(selector).is_some()
    }

    /// How many elements match `selector`.
    #[must_use]
    pub fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }

    /// Whether `node` matches `selector`.
    #[must_use]
    pub fn matches(&self, node: NodeId, selector: &str) -> bool {
        ladle_select::matches(&self.tree, node, selector)
    }

    /// Ancestors of `node` matching `selector`, nearest first.
    #[must_use]
    pub fn select_parents(&self, node: NodeId, selector: &str) -> Vec<NodeId> {
        ladle_select::select_parents(&self.tree, node, selector)
    }

    /// All text under `node`.
    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    /// Text under `node`, joined and stripped per `options`.
    #[must_use]
    pub fn text_with(&self, node: NodeId, options: &TextOptions) -> String {
        self.tree.get_text(node, options)
    }

    /// The whole document as markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_html_with(self.root(), &SerializeOptions::default())
    }

    /// `node` and its subtree as markup in the given dialect.
    #[must_use]
    pub fn to_html_with(&self, node: NodeId, options: &SerializeOptions) -> String {
        serialize(&self.tree, node, options)
    }
}

impl From<DomTree> for Document {
    fn from(tree: DomTree) -> Self {
        Self { tree }
    }
}
