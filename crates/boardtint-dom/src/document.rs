//! The document-tree contract
//!
//! [`Document`] is the mutable external state the sync core observes and
//! edits: element lookup, text and inline-style access, element creation,
//! and per-subtree insertion feeds. Implementations are expected to be
//! tolerant — operations on unknown or removed nodes are no-ops or return
//! empty values, never failures, because handles can go stale at any time
//! under a host that rerenders freely.

use crate::matcher::NodeMatch;
use crate::node::NodeId;
use tokio::sync::mpsc;

/// A batch of nodes inserted under a watched subtree
#[derive(Debug, Clone, Default)]
pub struct MutationBatch {
    /// Nodes added in this batch, in insertion order
    pub added: Vec<NodeId>,
}

impl MutationBatch {
    /// Whether the batch carries any insertion
    #[inline]
    #[must_use]
    pub fn has_additions(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Stream of insertion batches for one watched subtree
///
/// The stream ends (yields `None`) once the watched root is detached from
/// the document; watchers are never torn down explicitly.
pub type MutationEvents = mpsc::UnboundedReceiver<MutationBatch>;

/// The host-provided document tree
///
/// All methods take `&self`; the document is shared mutable state and
/// implementations carry their own interior synchronization.
pub trait Document: Send + Sync + 'static {
    /// The document root
    fn root(&self) -> NodeId;

    /// Tag name of a node, if it exists
    fn tag(&self, node: NodeId) -> Option<String>;

    /// Parent of a node
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Children of a node, in document order
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Whether the node is reachable from the document root
    fn is_attached(&self, node: NodeId) -> bool;

    /// All descendants of `scope` matching `matcher`, in document order
    ///
    /// `scope` itself is not considered.
    fn query(&self, scope: NodeId, matcher: &NodeMatch) -> Vec<NodeId>;

    /// Read an attribute value
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Write an attribute value
    fn set_attribute(&self, node: NodeId, name: &str, value: &str);

    /// A node's own text
    fn text(&self, node: NodeId) -> String;

    /// Replace a node's own text, removing its children
    fn set_text(&self, node: NodeId, text: &str);

    /// Read the inline-style declaration string
    fn inline_style(&self, node: NodeId) -> String;

    /// Replace the inline-style declaration string
    fn set_inline_style(&self, node: NodeId, style: &str);

    /// Create a detached element
    fn create_element(&self, tag: &str) -> NodeId;

    /// Append `child` as the last child of `parent`
    ///
    /// Re-parents the child if it was attached elsewhere.
    fn append_child(&self, parent: NodeId, child: NodeId);

    /// Detach a node (and its subtree) from its parent
    fn detach(&self, node: NodeId);

    /// Subscribe to insertions anywhere under `root`
    fn watch_subtree(&self, root: NodeId) -> MutationEvents;

    /// First descendant of `scope` matching `matcher`
    fn query_first(&self, scope: NodeId, matcher: &NodeMatch) -> Option<NodeId> {
        self.query(scope, matcher).into_iter().next()
    }

    /// Last child of a node
    fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).pop()
    }
}
