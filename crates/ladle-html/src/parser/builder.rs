//! Single-pass tree construction.

use ladle_dom::{Attributes, DomTree, ElementData, NodeId, NodeType, SourceLocation};
use tracing::{debug, trace};

use super::rules::{ContentModel, closes_implicitly};
use crate::options::ParseOptions;
use crate::tokenizer::{HtmlTokenizer, Spanned, Token};

/// Builds a [`DomTree`] from markup in one forward scan.
///
/// There is a single insertion point. Start tags of ordinary elements move
/// it down, matching end tags move it back up, and a small table of
/// implicit-close rules handles the common omitted end tags (`<li>`, `<p>`,
/// table rows and cells). Malformed input never fails; it is absorbed.
pub struct HtmlParser<'a> {
    tokenizer: HtmlTokenizer<'a>,
    options: &'a ParseOptions,
    tree: DomTree,
    current: NodeId,
    input_len: usize,
}

impl<'a> HtmlParser<'a> {
    /// Prepare to parse `input` with `options`.
    #[must_use]
    pub fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        let tokenizer = HtmlTokenizer::new(input)
            .with_case_folding(options.lower_case_tags, options.lower_case_attributes);
        Self {
            tokenizer,
            options,
            tree: DomTree::new(),
            current: NodeId::ROOT,
            input_len: input.len(),
        }
    }

    /// Consume the input and return the finished tree.
    #[must_use]
    pub fn run(mut self) -> DomTree {
        while let Some(Spanned { token, location }) = self.tokenizer.next_token() {
            let location = self.options.track_source_locations.then_some(location);
            match token {
                Token::Text(text) => self.insert_text(text, location),
                Token::Comment(body) => self.insert_leaf(NodeType::Comment(body), location),
                Token::Doctype(body) => self.insert_leaf(NodeType::Doctype(body), location),
                Token::EndTag { name } => self.close_to_tag(&name),
                Token::StartTag {
                    name,
                    attributes,
                    self_closing,
                } => self.insert_element(name, attributes, self_closing, location),
            }
        }
        debug!(
            nodes = self.tree.len(),
            bytes = self.input_len,
            "parsed document"
        );
        self.tree
    }

    fn insert_text(&mut self, text: String, location: Option<SourceLocation>) {
        if text.is_empty() {
            return;
        }
        // Merge with a preceding text sibling, e.g. around a literal `<`.
        if let Some(last) = self.tree.last_child(self.current)
            && let Some(node) = self.tree.get_mut(last)
            && let NodeType::Text(existing) = &mut node.node_type
        {
            existing.push_str(&text);
            return;
        }
        self.insert_leaf(NodeType::Text(text), location);
    }

    fn insert_leaf(&mut self, node_type: NodeType, location: Option<SourceLocation>) {
        let id = self.tree.alloc_at(node_type, location);
        self.tree.append_child(self.current, id);
    }

    fn insert_element(
        &mut self,
        name: String,
        attributes: Attributes,
        self_closing: bool,
        location: Option<SourceLocation>,
    ) {
        if !self.options.xml_mode
            && let Some(open) = self.tree.tag_name(self.current)
            && closes_implicitly(open, &name)
        {
            trace!(open, incoming = %name, "implicitly closing element");
            self.current = self.tree.parent(self.current).unwrap_or(NodeId::ROOT);
        }

        let model = ContentModel::of(&name, self_closing, self.options.xml_mode);
        let content = match model {
            ContentModel::RawText => Some(self.tokenizer.raw_text(&name, false)),
            ContentModel::Rcdata => Some(self.tokenizer.raw_text(&name, true)),
            ContentModel::Normal | ContentModel::Void => None,
        };

        let element = ElementData::with_attributes(name, attributes);
        if let Some(strainer) = &self.options.strainer
            && !strainer.accepts(&element, content.as_deref().unwrap_or(""))
        {
            return;
        }

        let id = self.tree.alloc_at(NodeType::Element(element), location);
        self.tree.append_child(self.current, id);
        if let Some(text) = content.filter(|t| !t.is_empty()) {
            let text_id = self.tree.alloc(NodeType::Text(text));
            self.tree.append_child(id, text_id);
        }
        if model == ContentModel::Normal {
            self.current = id;
        }
    }

    /// Move the insertion point above the nearest open element named `name`.
    fn close_to_tag(&mut self, name: &str) {
        let mut open = Some(self.current);
        while let Some(id) = open.filter(|&id| id != NodeId::ROOT) {
            if self.tree.tag_name(id) == Some(name) {
                self.current = self.tree.parent(id).unwrap_or(NodeId::ROOT);
                return;
            }
            open = self.tree.parent(id);
        }
        trace!(name, "ignoring end tag with no open element");
    }
}

/// Parse `input` into a tree.
///
/// Never fails: every malformed construct has a defined recovery.
#[must_use]
pub fn parse(input: &str, options: &ParseOptions) -> DomTree {
    HtmlParser::new(input, options).run()
}

/// Parse `input` with default options.
#[must_use]
pub fn parse_document(input: &str) -> DomTree {
    parse(input, &ParseOptions::default())
}
