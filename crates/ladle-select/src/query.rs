//! Document-order queries built on the matcher.

use ladle_dom::{DomTree, NodeId};
use tracing::trace;

use crate::compiler::compile;
use crate::selector::SelectorList;

/// Descendants of `scope` matching `selector`, in document order.
///
/// `scope` itself is never included. Stops after `limit` matches when a limit
/// is given.
#[must_use]
pub fn select(tree: &DomTree, scope: NodeId, selector: &str, limit: Option<usize>) -> Vec<NodeId> {
    let found = select_compiled(tree, scope, &compile(selector), limit);
    trace!(selector, found = found.len(), "selected");
    found
}

/// Like [`select`], with an already compiled list.
#[must_use]
pub fn select_compiled(
    tree: &DomTree,
    scope: NodeId,
    list: &SelectorList,
    limit: Option<usize>,
) -> Vec<NodeId> {
    let matching = tree
        .descendants(scope)
        .filter(|&id| list.matches(tree, id));
    match limit {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    }
}

/// The first descendant of `scope` matching `selector`.
#[must_use]
pub fn select_one(tree: &DomTree, scope: NodeId, selector: &str) -> Option<NodeId> {
    let list = compile(selector);
    tree.descendants(scope).find(|&id| list.matches(tree, id))
}

/// Ancestors of `node` matching `selector`, nearest first.
#[must_use]
pub fn select_parents(tree: &DomTree, node: NodeId, selector: &str) -> Vec<NodeId> {
    let list = compile(selector);
    tree.ancestors(node)
        .take_while(|&id| id != NodeId::ROOT)
        .filter(|&id| list.matches(tree, id))
        .collect()
}

/// The nearest ancestor of `node` matching `selector`.
#[must_use]
pub fn select_parent(tree: &DomTree, node: NodeId, selector: &str) -> Option<NodeId> {
    let list = compile(selector);
    tree.ancestors(node)
        .take_while(|&id| id != NodeId::ROOT)
        .find(|&id| list.matches(tree, id))
}
