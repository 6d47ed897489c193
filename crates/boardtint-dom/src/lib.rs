//! Boardtint host interface
//!
//! The contracts through which the sync core observes and annotates the
//! host application's page, kept abstract so the same core drives a real
//! browser document or the in-memory backend used in tests.
//!
//! # Core Concepts
//!
//! - [`Document`]: the mutable external document tree (lookup, text, style,
//!   element creation, insertion feeds)
//! - [`NodeId`]: opaque node identity, never reused for a new node
//! - [`NodeMatch`]: structural matcher with a CSS-selector rendering
//! - [`NavigationHub`]: the installed-once unified route-changed service
//! - [`MemoryDocument`]: thread-safe in-memory [`Document`] backend
//!
//! The core only ever edits what it can also re-derive: every handle handed
//! out here is a reference into host-owned state, not an owned value.

#![warn(unreachable_pub)]

mod document;
mod matcher;
mod navigation;
mod node;

pub mod memory;
pub mod style;

pub use document::{Document, MutationBatch, MutationEvents};
pub use matcher::NodeMatch;
pub use memory::MemoryDocument;
pub use navigation::{NavigationHub, RouteChange, RouteChangeKind, RouteEvents};
pub use node::NodeId;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
