//! Node identity

use serde::{Deserialize, Serialize};

/// Opaque identity of one document node
///
/// Identity is per node instance: a backend must never hand out the same id
/// for two different nodes, even after the first is removed. Cheap to copy
/// and usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
