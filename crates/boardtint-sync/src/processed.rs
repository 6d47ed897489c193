//! Processed-node bookkeeping
//!
//! [`ProcessedSet`] records which node identities have already been styled.
//! A node is restyled iff its identity is absent here; once marked it stays
//! marked for the lifetime of that node instance. Hosts replace nodes
//! rather than mutating them on data change, and backends never reuse ids,
//! so pruning detached entries can never un-process a live node.

use boardtint_dom::{Document, NodeId};
use std::collections::HashSet;

/// Owned set of already-styled node identities
#[derive(Debug, Default)]
pub struct ProcessedSet {
    nodes: HashSet<NodeId>,
}

impl ProcessedSet {
    /// Create an empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a node processed
    ///
    /// Returns `true` if the node was not already marked — the caller that
    /// sees `true` owns styling this node.
    #[inline]
    pub fn mark(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    /// Whether a node is marked
    #[inline]
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Drop entries whose nodes are no longer attached to the document
    pub fn prune<D: Document>(&mut self, document: &D) {
        self.nodes.retain(|node| document.is_attached(*node));
    }

    /// Number of marked nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are marked
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
