//! Unified navigation notification
//!
//! Hosts change routes three ways that emit nothing by themselves: history
//! pushes, history replacements, and back/forward traversal. A browser shell
//! wraps the two history-mutation entry points so each call delegates and
//! then reports here, and forwards the built-in traversal notification; the
//! initial page load is reported once at startup. Consumers see a single
//! stream and react to every kind identically.
//!
//! The hub is installed once at startup and never torn down.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// How a route change was triggered
///
/// Carried for diagnostics only; all kinds are handled the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteChangeKind {
    /// Initial page load
    Initial,
    /// History-stack push
    Pushed,
    /// History-stack replacement
    Replaced,
    /// Back/forward traversal
    Traversed,
}

/// One unified route-changed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteChange {
    /// Trigger kind
    pub kind: RouteChangeKind,
    /// The page path after the change
    pub path: String,
}

impl RouteChange {
    /// Create a route-changed event
    #[inline]
    #[must_use]
    pub fn new(kind: RouteChangeKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Stream of unified route-changed events
pub type RouteEvents = mpsc::UnboundedReceiver<RouteChange>;

/// Emitter side of the unified navigation stream
///
/// Clone freely; all clones feed the single subscriber handed out by
/// [`NavigationHub::new`]. Emitting after the subscriber is gone is a no-op.
#[derive(Debug, Clone)]
pub struct NavigationHub {
    sender: mpsc::UnboundedSender<RouteChange>,
}

impl NavigationHub {
    /// Create the hub and its event stream
    #[must_use]
    pub fn new() -> (Self, RouteEvents) {
        let (sender, events) = mpsc::unbounded_channel();
        (Self { sender }, events)
    }

    /// Report the initial page load
    pub fn initial(&self, path: &str) {
        self.emit(RouteChangeKind::Initial, path);
    }

    /// Report a history-stack push
    pub fn pushed(&self, path: &str) {
        self.emit(RouteChangeKind::Pushed, path);
    }

    /// Report a history-stack replacement
    pub fn replaced(&self, path: &str) {
        self.emit(RouteChangeKind::Replaced, path);
    }

    /// Report a back/forward traversal
    pub fn traversed(&self, path: &str) {
        self.emit(RouteChangeKind::Traversed, path);
    }

    fn emit(&self, kind: RouteChangeKind, path: &str) {
        let _ = self.sender.send(RouteChange::new(kind, path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn every_kind_feeds_one_stream() {
        let (hub, mut events) = NavigationHub::new();
        hub.initial("/a");
        hub.pushed("/b");
        hub.replaced("/c");
        hub.traversed("/d");

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(events.recv().await.unwrap());
        }
        assert_eq!(
            seen,
            vec![
                RouteChange::new(RouteChangeKind::Initial, "/a"),
                RouteChange::new(RouteChangeKind::Pushed, "/b"),
                RouteChange::new(RouteChangeKind::Replaced, "/c"),
                RouteChange::new(RouteChangeKind::Traversed, "/d"),
            ]
        );
    }

    #[tokio::test]
    async fn emitting_without_subscriber_is_a_no_op() {
        let (hub, events) = NavigationHub::new();
        drop(events);
        hub.pushed("/anywhere");
    }
}
