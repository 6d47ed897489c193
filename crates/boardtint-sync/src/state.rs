//! Activation lifecycle states
//!
//! One activation serves one navigation event and only ever moves forward
//! through these states. Transitions are validated so a refactor cannot
//! silently skip the de-duplication guard.

use crate::error::SyncError;
use serde::{Deserialize, Serialize};

/// Lifecycle of one sync activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncState {
    /// No board route recognized yet
    Idle,
    /// Route classified, waiting for the board root to render
    Detecting,
    /// Board root found, claiming it
    Attaching,
    /// Styling passes running on insertion batches
    Observing,
    /// Nothing further for this event
    Terminal,
}

/// States reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: SyncState) -> Vec<SyncState> {
    use SyncState::{Attaching, Detecting, Idle, Observing, Terminal};
    match from {
        Idle => vec![Detecting],
        Detecting => vec![Attaching, Idle],
        Attaching => vec![Observing, Terminal],
        Observing => vec![Terminal],
        Terminal => vec![],
    }
}

/// Validate a single transition
///
/// # Errors
/// Returns [`SyncError::IllegalTransition`] when `to` is not reachable from
/// `from`.
pub fn validate_transition(from: SyncState, to: SyncState) -> Result<(), SyncError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(SyncError::IllegalTransition { from, to })
    }
}

fn allowed(from: SyncState, to: SyncState) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_path_is_legal() {
        validate_transition(SyncState::Idle, SyncState::Detecting).unwrap();
        validate_transition(SyncState::Detecting, SyncState::Attaching).unwrap();
        validate_transition(SyncState::Attaching, SyncState::Observing).unwrap();
        validate_transition(SyncState::Observing, SyncState::Terminal).unwrap();
    }

    #[test]
    fn superseded_detection_returns_to_idle() {
        validate_transition(SyncState::Detecting, SyncState::Idle).unwrap();
    }

    #[test]
    fn duplicate_attach_terminates() {
        validate_transition(SyncState::Attaching, SyncState::Terminal).unwrap();
    }

    #[test]
    fn backward_jumps_are_illegal() {
        let result = validate_transition(SyncState::Observing, SyncState::Detecting);
        assert!(matches!(
            result,
            Err(SyncError::IllegalTransition {
                from: SyncState::Observing,
                to: SyncState::Detecting,
            })
        ));
    }

    #[test]
    fn terminal_is_final() {
        assert!(allowed_transitions(SyncState::Terminal).is_empty());
    }
}
