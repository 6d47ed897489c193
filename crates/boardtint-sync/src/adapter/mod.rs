//! Board-layout adapters
//!
//! The two supported board layouts differ in where the board root lives,
//! how cards are identified, and how labels are rendered. [`BoardAdapter`]
//! is the capability seam; [`VariantAdapter`] is the closed set of
//! implementations, selected once per [`ProjectContext`](crate::ProjectContext)
//! and never re-branched inline.

mod company;
mod team;

pub use company::CompanyManagedBoard;
pub use team::TeamManagedBoard;

use crate::config::SyncConfig;
use crate::route::{ProjectContext, Variant};
use boardtint_color::LabelPalette;
use boardtint_dom::{Document, NodeId};

/// Ephemeral view over one rendered card
///
/// Re-derived on every styling pass; `element` is the card's node identity
/// and `key` the issue identifier extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRef {
    /// Issue identifier
    pub key: String,
    /// Card node
    pub element: NodeId,
}

/// Variant-specific board capabilities
///
/// Implementations never fail: a card or label whose structure does not
/// match expectations is skipped, leaving siblings untouched. The host
/// markup is uncontrolled and may change shape without notice.
pub trait BoardAdapter<D: Document> {
    /// Locate the board root element, if it has rendered
    fn locate_root(&self, document: &D) -> Option<NodeId>;

    /// List the currently rendered cards
    fn list_cards(&self, document: &D) -> Vec<CardRef>;

    /// Extract a card's label display texts
    ///
    /// An absent or empty label field yields zero labels, not an error.
    fn extract_labels(&self, document: &D, card: &CardRef) -> Vec<String>;

    /// Apply the derived palettes to a card's labels
    fn apply_label_style(&self, document: &D, card: &CardRef, labels: &[(String, LabelPalette)]);
}

/// The closed set of board-layout adapters
#[derive(Debug, Clone)]
pub enum VariantAdapter {
    /// Team-managed layout
    TeamManaged(TeamManagedBoard),
    /// Company-managed layout
    CompanyManaged(CompanyManagedBoard),
}

impl VariantAdapter {
    /// Select the adapter for a classified route
    #[must_use]
    pub fn for_context(context: &ProjectContext, config: &SyncConfig) -> Self {
        match context.variant {
            Variant::TeamManaged => Self::TeamManaged(TeamManagedBoard::new(&context.key)),
            Variant::CompanyManaged => Self::CompanyManaged(CompanyManagedBoard::new(config)),
        }
    }
}

impl<D: Document> BoardAdapter<D> for VariantAdapter {
    fn locate_root(&self, document: &D) -> Option<NodeId> {
        match self {
            Self::TeamManaged(adapter) => adapter.locate_root(document),
            Self::CompanyManaged(adapter) => adapter.locate_root(document),
        }
    }

    fn list_cards(&self, document: &D) -> Vec<CardRef> {
        match self {
            Self::TeamManaged(adapter) => adapter.list_cards(document),
            Self::CompanyManaged(adapter) => adapter.list_cards(document),
        }
    }

    fn extract_labels(&self, document: &D, card: &CardRef) -> Vec<String> {
        match self {
            Self::TeamManaged(adapter) => adapter.extract_labels(document, card),
            Self::CompanyManaged(adapter) => adapter.extract_labels(document, card),
        }
    }

    fn apply_label_style(&self, document: &D, card: &CardRef, labels: &[(String, LabelPalette)]) {
        match self {
            Self::TeamManaged(adapter) => adapter.apply_label_style(document, card, labels),
            Self::CompanyManaged(adapter) => adapter.apply_label_style(document, card, labels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_follows_variant() {
        let config = SyncConfig::new();
        let team = VariantAdapter::for_context(
            &ProjectContext {
                key: "ABC".to_string(),
                variant: Variant::TeamManaged,
            },
            &config,
        );
        assert!(matches!(team, VariantAdapter::TeamManaged(_)));

        let company = VariantAdapter::for_context(
            &ProjectContext {
                key: "XYZ".to_string(),
                variant: Variant::CompanyManaged,
            },
            &config,
        );
        assert!(matches!(company, VariantAdapter::CompanyManaged(_)));
    }
}
