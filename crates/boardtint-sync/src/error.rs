//! Error types for the sync controller
//!
//! The controller degrades silently on host-markup mismatches, so errors
//! here cover internal invariants only; nothing propagates to the host.

use crate::state::SyncState;

/// Sync controller error
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// An activation attempted a lifecycle jump that is not allowed
    #[error("illegal sync transition: {from:?} -> {to:?}")]
    IllegalTransition {
        /// State the activation was in
        from: SyncState,
        /// State it attempted to enter
        to: SyncState,
    },
}
