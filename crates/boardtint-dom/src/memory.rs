//! In-memory document backend
//!
//! [`MemoryDocument`] implements the full [`Document`] contract against an
//! owned node table, standing in for the host page in tests and simulations.
//! It mirrors the behaviors the sync core leans on: node identities are
//! allocated monotonically and never reused, subtree watchers stop firing
//! once their root detaches, and every write is counted so tests can assert
//! that a code path performed zero document mutations.

use crate::document::{Document, MutationBatch, MutationEvents};
use crate::matcher::NodeMatch;
use crate::node::NodeId;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
struct ElementRecord {
    tag: String,
    attributes: HashMap<String, String>,
    text: String,
    style: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ElementRecord {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: HashMap::new(),
            text: String::new(),
            style: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct Watcher {
    root: NodeId,
    sender: mpsc::UnboundedSender<MutationBatch>,
}

/// Thread-safe in-memory document tree
///
/// The root node exists from construction and carries the `body` tag. All
/// other nodes start detached and join the tree via
/// [`Document::append_child`].
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: DashMap<NodeId, ElementRecord>,
    watchers: Mutex<Vec<Watcher>>,
    next_id: AtomicU64,
    mutations: AtomicU64,
    root: NodeId,
}

impl MemoryDocument {
    /// Create a document holding only the root node
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId(0);
        let nodes = DashMap::new();
        nodes.insert(root, ElementRecord::new("body"));
        Self {
            nodes,
            watchers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            mutations: AtomicU64::new(0),
            root,
        }
    }

    /// Number of document mutations performed so far
    ///
    /// Counts attribute, text, style, append, and detach writes. Creating a
    /// still-detached element is not an observable document mutation.
    #[must_use]
    pub fn mutation_count(&self) -> u64 {
        self.mutations.load(Ordering::Relaxed)
    }

    fn snapshot(&self, node: NodeId) -> Option<ElementRecord> {
        self.nodes.get(&node).map(|r| r.value().clone())
    }

    fn count_mutation(&self) {
        self.mutations.fetch_add(1, Ordering::Relaxed);
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(at) = current {
            if at == ancestor {
                return true;
            }
            current = self.nodes.get(&at).and_then(|r| r.parent);
        }
        false
    }

    fn unlink_from_parent(&self, node: NodeId) {
        let parent = self.nodes.get(&node).and_then(|r| r.parent);
        if let Some(parent) = parent {
            if let Some(mut record) = self.nodes.get_mut(&parent) {
                record.children.retain(|c| *c != node);
            }
        }
        if let Some(mut record) = self.nodes.get_mut(&node) {
            record.parent = None;
        }
    }

    fn prune_detached_watchers(&self) {
        self.watchers
            .lock()
            .retain(|w| self.is_attached(w.root) && !w.sender.is_closed());
    }

    fn notify_insertion(&self, parent: NodeId, child: NodeId) {
        self.watchers.lock().retain(|w| {
            if !self.is_attached(w.root) {
                return false;
            }
            if self.is_ancestor_or_self(w.root, parent) {
                return w
                    .sender
                    .send(MutationBatch {
                        added: vec![child],
                    })
                    .is_ok();
            }
            true
        });
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        self.root
    }

    fn tag(&self, node: NodeId) -> Option<String> {
        self.nodes.get(&node).map(|r| r.tag.clone())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|r| r.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|r| r.children.clone())
            .unwrap_or_default()
    }

    fn is_attached(&self, node: NodeId) -> bool {
        if !self.nodes.contains_key(&node) {
            return false;
        }
        self.is_ancestor_or_self(self.root, node)
    }

    fn query(&self, scope: NodeId, matcher: &NodeMatch) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self
            .children(scope)
            .into_iter()
            .rev()
            .collect();
        while let Some(node) = stack.pop() {
            if let Some(record) = self.snapshot(node) {
                if matcher.matches(&record.tag, &record.attributes, &record.style) {
                    found.push(node);
                }
                stack.extend(record.children.iter().rev().copied());
            }
        }
        found
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(&node)
            .and_then(|r| r.attributes.get(name).cloned())
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        if let Some(mut record) = self.nodes.get_mut(&node) {
            record
                .attributes
                .insert(name.to_string(), value.to_string());
            drop(record);
            self.count_mutation();
        }
    }

    fn text(&self, node: NodeId) -> String {
        self.nodes
            .get(&node)
            .map(|r| r.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&self, node: NodeId, text: &str) {
        let children = match self.nodes.get_mut(&node) {
            Some(mut record) => {
                record.text = text.to_string();
                std::mem::take(&mut record.children)
            }
            None => return,
        };
        for child in children {
            if let Some(mut record) = self.nodes.get_mut(&child) {
                record.parent = None;
            }
        }
        self.count_mutation();
        self.prune_detached_watchers();
    }

    fn inline_style(&self, node: NodeId) -> String {
        self.nodes
            .get(&node)
            .map(|r| r.style.clone())
            .unwrap_or_default()
    }

    fn set_inline_style(&self, node: NodeId, style: &str) {
        if let Some(mut record) = self.nodes.get_mut(&node) {
            record.style = style.to_string();
            drop(record);
            self.count_mutation();
        }
    }

    fn create_element(&self, tag: &str) -> NodeId {
        let id = NodeId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.nodes.insert(id, ElementRecord::new(tag));
        id
    }

    fn append_child(&self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return;
        }
        // appending an ancestor under its own descendant would cycle
        if self.is_ancestor_or_self(child, parent) {
            return;
        }
        self.unlink_from_parent(child);
        if let Some(mut record) = self.nodes.get_mut(&parent) {
            record.children.push(child);
        }
        if let Some(mut record) = self.nodes.get_mut(&child) {
            record.parent = Some(parent);
        }
        self.count_mutation();
        self.notify_insertion(parent, child);
    }

    fn detach(&self, node: NodeId) {
        if self.parent(node).is_none() {
            return;
        }
        self.unlink_from_parent(node);
        self.count_mutation();
        self.prune_detached_watchers();
    }

    fn watch_subtree(&self, root: NodeId) -> MutationEvents {
        let (sender, events) = mpsc::unbounded_channel();
        self.watchers.lock().push(Watcher { root, sender });
        events
    }
}
