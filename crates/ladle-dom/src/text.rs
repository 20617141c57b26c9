//! Collecting character data from a subtree.

use crate::{DomTree, NodeId, NodeType};

/// How [`DomTree::get_text`] joins the pieces it finds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Inserted between consecutive text pieces.
    pub separator: String,
    /// Trim each piece and drop the ones that end up empty.
    pub strip: bool,
}

impl TextOptions {
    /// Join with `separator`, keeping pieces as they are.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            strip: false,
        }
    }

    /// Enable or disable trimming.
    #[must_use]
    pub const fn strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }
}

/// Text payloads under a node in document order.
pub struct Strings<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
    strip: bool,
}

impl<'a> Iterator for Strings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            self.stack
                .extend(self.tree.children(id).iter().rev().copied());
            let Some(text) = self.tree.as_text(id) else {
                continue;
            };
            if !self.strip {
                return Some(text);
            }
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
        None
    }
}

impl DomTree {
    /// Concatenation of every text node under `id` (comments are ignored).
    ///
    /// For a text node this is its own payload.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.strings_from(id, false).collect()
    }

    /// Text under `id`, joined and optionally stripped per `options`.
    #[must_use]
    pub fn get_text(&self, id: NodeId, options: &TextOptions) -> String {
        let pieces: Vec<&str> = self.strings_from(id, options.strip).collect();
        pieces.join(&options.separator)
    }

    /// Every text payload under `id`, in document order.
    #[must_use]
    pub fn strings(&self, id: NodeId) -> Strings<'_> {
        self.strings_from(id, false)
    }

    /// Like [`strings`](Self::strings), trimmed, with blank pieces skipped.
    #[must_use]
    pub fn stripped_strings(&self, id: NodeId) -> Strings<'_> {
        self.strings_from(id, true)
    }

    /// The single string a node wraps, if it wraps exactly one.
    ///
    /// Follows one-child chains: `<p><b>hi</b></p>` yields `"hi"`.
    #[must_use]
    pub fn get_string(&self, id: NodeId) -> Option<&str> {
        let mut current = id;
        loop {
            match &self.get(current)?.node_type {
                NodeType::Text(text) => return Some(text),
                NodeType::Element(_) | NodeType::Document => match self.children(current) {
                    [only] => current = *only,
                    _ => return None,
                },
                NodeType::Comment(_) | NodeType::Doctype(_) => return None,
            }
        }
    }

    fn strings_from(&self, id: NodeId, strip: bool) -> Strings<'_> {
        Strings {
            tree: self,
            stack: vec![id],
            strip,
        }
    }
}
