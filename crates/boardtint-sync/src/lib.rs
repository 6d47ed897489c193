//! Boardtint sync controller
//!
//! Watches a host application's board view and recolors issue labels
//! deterministically from their text:
//! - Classifies the current route into a board variant
//! - Waits for the board's root element to render
//! - Styles every card's labels exactly once per node identity
//! - Keeps styling new cards as the host inserts them or the route changes
//!
//! # Core Concepts
//!
//! - [`BoardSync`]: the controller; feed it the unified navigation stream
//! - [`BoardAdapter`]: variant-specific extraction and styling capabilities
//! - [`ProjectContext`]: what board the current route points at
//! - [`ProcessedSet`]: node identities that have already been styled
//!
//! The controller is an augmentation layer: it must never break the host.
//! Cards whose structure does not match expectations are skipped silently,
//! and nothing above debug level is logged in normal operation.

#![warn(unreachable_pub)]

mod adapter;
mod config;
mod controller;
mod error;
mod poll;
mod processed;
mod route;
mod state;

pub use adapter::{BoardAdapter, CardRef, CompanyManagedBoard, TeamManagedBoard, VariantAdapter};
pub use config::SyncConfig;
pub use controller::BoardSync;
pub use error::SyncError;
pub use poll::poll_until;
pub use processed::ProcessedSet;
pub use route::{detect_project, ProjectContext, Variant};
pub use state::{allowed_transitions, validate_transition, SyncState};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
