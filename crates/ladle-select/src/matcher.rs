//! Matching compiled selectors against tree nodes.
//!
//! Matching reads a group right to left. The last part must hold on the
//! candidate; each combinator then moves to the first node it can reach that
//! satisfies the part on its left, without backtracking.
//!
//! Arguments of `:not()`, `:is()` and `:has()` are compiled lazily through a
//! [`SelectorCompiler`]: the process-wide one for the plain `matches`
//! methods, the given one for the `matches_with` variants.

use ladle_dom::{DomTree, ElementData, NodeId};

use crate::compiler::{SelectorCompiler, global};
use crate::pseudo::{NthKind, PseudoClass};
use crate::selector::{Combinator, CompiledSelector, SelectorList, SelectorPart};

impl CompiledSelector {
    /// Whether `node` matches this group. Non-elements never match.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.matches_with(tree, node, global())
    }

    /// Like [`matches`](Self::matches), compiling nested arguments through
    /// `compiler`.
    #[must_use]
    pub fn matches_with(&self, tree: &DomTree, node: NodeId, compiler: &SelectorCompiler) -> bool {
        let Some((last, rest)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches_with(tree, node, compiler) {
            return false;
        }

        let mut current = node;
        for (part, combinator) in rest.iter().rev().zip(self.combinators.iter().rev()) {
            let next = match combinator {
                Combinator::Descendant => tree
                    .ancestors(current)
                    .take_while(|&id| id != NodeId::ROOT)
                    .find(|&id| part.matches_with(tree, id, compiler)),
                Combinator::Child => tree
                    .parent(current)
                    .filter(|&id| part.matches_with(tree, id, compiler)),
                Combinator::NextSibling => previous_element(tree, current)
                    .filter(|&id| part.matches_with(tree, id, compiler)),
                Combinator::SubsequentSibling => tree
                    .preceding_siblings(current)
                    .find(|&id| part.matches_with(tree, id, compiler)),
            };
            match next {
                Some(id) => current = id,
                None => return false,
            }
        }
        true
    }
}

impl SelectorList {
    /// Whether any group matches `node`.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.matches_with(tree, node, global())
    }

    /// Like [`matches`](Self::matches), compiling nested arguments through
    /// `compiler`.
    #[must_use]
    pub fn matches_with(&self, tree: &DomTree, node: NodeId, compiler: &SelectorCompiler) -> bool {
        self.iter()
            .any(|selector| selector.matches_with(tree, node, compiler))
    }
}

impl SelectorPart {
    /// Whether every condition of this compound holds on `node`.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.matches_with(tree, node, global())
    }

    /// Like [`matches`](Self::matches), compiling nested arguments through
    /// `compiler`.
    #[must_use]
    pub fn matches_with(&self, tree: &DomTree, node: NodeId, compiler: &SelectorCompiler) -> bool {
        let Some(element) = tree.as_element(node) else {
            return false;
        };

        if let Some(tag) = &self.tag
            && tag != "*"
            && !element.tag_name.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if let Some(id) = &self.id
            && element.id() != Some(id.as_str())
        {
            return false;
        }

        self.classes.iter().all(|class| element.has_class(class))
            && self
                .attributes
                .iter()
                .all(|attr| attr.matches_value(element.attr(attr.name())))
            && self
                .pseudo_classes
                .iter()
                .all(|pseudo| pseudo.matches(tree, node, element, compiler))
    }
}

impl PseudoClass {
    fn matches(
        &self,
        tree: &DomTree,
        node: NodeId,
        element: &ElementData,
        compiler: &SelectorCompiler,
    ) -> bool {
        match self {
            Self::Nth(kind, formula) => formula.is_some_and(|formula| {
                nth_position(tree, node, element, *kind)
                    .and_then(|n| i64::try_from(n).ok())
                    .is_some_and(|n| formula.matches(n))
            }),
            Self::FirstChild => nth_position(tree, node, element, NthKind::Child) == Some(1),
            Self::LastChild => nth_position(tree, node, element, NthKind::LastChild) == Some(1),
            Self::OnlyChild => {
                nth_position(tree, node, element, NthKind::Child) == Some(1)
                    && nth_position(tree, node, element, NthKind::LastChild) == Some(1)
            }
            Self::FirstOfType => nth_position(tree, node, element, NthKind::OfType) == Some(1),
            Self::LastOfType => {
                nth_position(tree, node, element, NthKind::LastOfType) == Some(1)
            }
            Self::OnlyOfType => {
                nth_position(tree, node, element, NthKind::OfType) == Some(1)
                    && nth_position(tree, node, element, NthKind::LastOfType) == Some(1)
            }
            Self::Empty => tree
                .children(node)
                .iter()
                .all(|&child| tree.as_text(child).is_some_and(|t| t.trim().is_empty())),
            Self::Root => tree.parent(node) == Some(NodeId::ROOT),
            Self::Not(arg) => arg
                .as_deref()
                .is_none_or(|list| !compiler.compile(list).matches_with(tree, node, compiler)),
            Self::Is(arg) => arg
                .as_deref()
                .is_some_and(|list| compiler.compile(list).matches_with(tree, node, compiler)),
            Self::Has(arg) => arg
                .as_deref()
                .is_some_and(|relative| has_relative(tree, node, relative, compiler)),
            Self::Contains(arg) => arg
                .as_deref()
                .is_some_and(|needle| tree.text_content(node).contains(needle)),
            Self::Lang(arg) => arg.as_deref().is_some_and(|code| {
                nearest_lang(tree, node).is_some_and(|lang| {
                    let lang = lang.to_lowercase();
                    lang == code
                        || lang
                            .strip_prefix(code)
                            .is_some_and(|rest| rest.starts_with('-'))
                })
            }),
            Self::Dir(arg) => arg
                .as_deref()
                .is_some_and(|dir| dir == nearest_dir(tree, node)),
            Self::HasAttribute(name) => element.has_attr(name),
            Self::LacksAttribute(name) => !element.has_attr(name),
            Self::Default => element.has_attr("checked") || element.has_attr("selected"),
            Self::PlaceholderShown => {
                element.has_attr("placeholder") && tree.text_content(node).trim().is_empty()
            }
            Self::Constant(value) => *value,
            Self::Unknown(_) => false,
        }
    }
}

/// Whether `node` matches the selector string `selector`.
///
/// Compiles through the process-wide cache.
#[must_use]
pub fn matches(tree: &DomTree, node: NodeId, selector: &str) -> bool {
    global().matches(tree, node, selector)
}

fn previous_element(tree: &DomTree, node: NodeId) -> Option<NodeId> {
    tree.preceding_siblings(node)
        .find(|&id| tree.as_element(id).is_some())
}

fn next_element(tree: &DomTree, node: NodeId) -> Option<NodeId> {
    tree.following_siblings(node)
        .find(|&id| tree.as_element(id).is_some())
}

/// 1-based position among element siblings, counted the way `kind` says.
///
/// `None` when the node has no parent.
fn nth_position(tree: &DomTree, node: NodeId, element: &ElementData, kind: NthKind) -> Option<usize> {
    let parent = tree.parent(node)?;
    let same_type = |id: &NodeId| {
        tree.tag_name(*id)
            .is_some_and(|tag| tag.eq_ignore_ascii_case(&element.tag_name))
    };
    let siblings: Vec<NodeId> = match kind {
        NthKind::Child | NthKind::LastChild => tree.element_children(parent).collect(),
        NthKind::OfType | NthKind::LastOfType => {
            tree.element_children(parent).filter(same_type).collect()
        }
    };
    let index = siblings.iter().position(|&id| id == node)?;
    Some(match kind {
        NthKind::Child | NthKind::OfType => index + 1,
        NthKind::LastChild | NthKind::LastOfType => siblings.len() - index,
    })
}

/// `:has()` argument: an optional leading combinator, then a selector list.
fn has_relative(tree: &DomTree, node: NodeId, relative: &str, compiler: &SelectorCompiler) -> bool {
    let relative = relative.trim();
    let (combinator, rest) = match relative.chars().next() {
        Some('>') => (Combinator::Child, &relative[1..]),
        Some('+') => (Combinator::NextSibling, &relative[1..]),
        Some('~') => (Combinator::SubsequentSibling, &relative[1..]),
        _ => (Combinator::Descendant, relative),
    };
    let rest = rest.trim();
    let list = compiler.compile(if rest.is_empty() { "*" } else { rest });

    match combinator {
        Combinator::Child => tree
            .element_children(node)
            .any(|child| list.matches_with(tree, child, compiler)),
        Combinator::NextSibling => {
            next_element(tree, node)
                .is_some_and(|sibling| list.matches_with(tree, sibling, compiler))
        }
        Combinator::SubsequentSibling => tree
            .following_siblings(node)
            .any(|sibling| list.matches_with(tree, sibling, compiler)),
        Combinator::Descendant => tree
            .descendants(node)
            .any(|descendant| list.matches_with(tree, descendant, compiler)),
    }
}

/// The nearest non-empty `lang` or `xml:lang`, starting at `node` itself.
fn nearest_lang(tree: &DomTree, node: NodeId) -> Option<&str> {
    std::iter::once(node)
        .chain(tree.ancestors(node))
        .filter_map(|id| tree.as_element(id))
        .find_map(|element| {
            element
                .attr("lang")
                .filter(|lang| !lang.is_empty())
                .or_else(|| element.attr("xml:lang").filter(|lang| !lang.is_empty()))
        })
}

/// The nearest `dir` of `ltr` or `rtl`, starting at `node`. Defaults to `ltr`.
fn nearest_dir(tree: &DomTree, node: NodeId) -> &'static str {
    std::iter::once(node)
        .chain(tree.ancestors(node))
        .filter_map(|id| tree.as_element(id)?.attr("dir"))
        .find_map(|dir| {
            if dir.eq_ignore_ascii_case("rtl") {
                Some("rtl")
            } else if dir.eq_ignore_ascii_case("ltr") {
                Some("ltr")
            } else {
                None
            }
        })
        .unwrap_or("ltr")
}
