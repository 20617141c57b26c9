//! Errors reported by checked tree operations.

use thiserror::Error;

use crate::NodeId;

/// Errors that can occur when mutating a [`DomTree`](crate::DomTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The handle does not refer to a node in this tree.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),

    /// The operation needs an element but got some other node.
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Text, comment and doctype nodes cannot hold children.
    #[error("node {0} cannot have children")]
    NotAContainer(NodeId),

    /// Inserting the node would make it its own ancestor, or would move the
    /// document root.
    #[error("cannot insert node {child} under node {parent}")]
    HierarchyRequest {
        /// The would-be parent.
        parent: NodeId,
        /// The node being inserted.
        child: NodeId,
    },

    /// The reference node is not a child of the given parent.
    #[error("node {child} is not a child of node {parent}")]
    NotAChild {
        /// The parent that was searched.
        parent: NodeId,
        /// The node that was expected among its children.
        child: NodeId,
    },
}

/// Result alias for tree operations.
pub type Result<T> = std::result::Result<T, DomError>;
