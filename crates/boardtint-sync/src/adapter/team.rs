//! Team-managed board adapter
//!
//! Cards are draggable blocks identified by a drag-handle id prefix, with
//! the issue key rendered as visible span text. Labels already render as
//! spans inside flex-laid-out blocks, so styling recolors them in place
//! with no DOM restructuring.

use super::{BoardAdapter, CardRef};
use boardtint_color::LabelPalette;
use boardtint_dom::{style, Document, NodeId, NodeMatch};

/// Adapter for the team-managed layout
#[derive(Debug, Clone)]
pub struct TeamManagedBoard {
    project_key: String,
}

impl TeamManagedBoard {
    /// Create the adapter for one project key
    #[must_use]
    pub fn new(project_key: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
        }
    }

    fn key_prefix(&self) -> String {
        format!("{}-", self.project_key)
    }

    /// Label spans are the direct span children of flex blocks inside the
    /// card, excluding the issue-key span.
    fn label_spans<D: Document>(&self, document: &D, card: NodeId) -> Vec<NodeId> {
        let key_prefix = self.key_prefix();
        document
            .query(card, &NodeMatch::new().tag("div").style("display", "flex"))
            .into_iter()
            .flat_map(|block| document.children(block))
            .filter(|child| document.tag(*child).as_deref() == Some("span"))
            .filter(|span| {
                let text = document.text(*span);
                !text.is_empty() && !text.starts_with(&key_prefix)
            })
            .collect()
    }
}

impl<D: Document> BoardAdapter<D> for TeamManagedBoard {
    fn locate_root(&self, document: &D) -> Option<NodeId> {
        let main = document.query_first(document.root(), &NodeMatch::new().id("ak-main-content"))?;
        let mut block = main;
        for _ in 0..3 {
            block = document
                .children(block)
                .into_iter()
                .find(|child| document.tag(*child).as_deref() == Some("div"))?;
        }
        let last = document.last_child(block)?;
        (document.tag(last).as_deref() == Some("div")).then_some(last)
    }

    fn list_cards(&self, document: &D) -> Vec<CardRef> {
        let key_prefix = self.key_prefix();
        document
            .query(
                document.root(),
                &NodeMatch::new().attr_prefix("data-rbd-draggable-id", "ISSUE::"),
            )
            .into_iter()
            .filter_map(|element| {
                let key = document
                    .query(element, &NodeMatch::new().tag("span"))
                    .into_iter()
                    .map(|span| document.text(span))
                    .find(|text| text.starts_with(&key_prefix))?;
                Some(CardRef { key, element })
            })
            .collect()
    }

    fn extract_labels(&self, document: &D, card: &CardRef) -> Vec<String> {
        self.label_spans(document, card.element)
            .into_iter()
            .map(|span| document.text(span))
            .collect()
    }

    fn apply_label_style(&self, document: &D, card: &CardRef, labels: &[(String, LabelPalette)]) {
        for span in self.label_spans(document, card.element) {
            let text = document.text(span);
            let Some((_, palette)) = labels.iter().find(|(label, _)| *label == text) else {
                continue;
            };
            let recolored = style::upsert_declaration(
                &document.inline_style(span),
                "color",
                &palette.foreground.css(),
            );
            let recolored =
                style::upsert_declaration(&recolored, "background-color", &palette.background.css());
            document.set_inline_style(span, &recolored);
        }
    }
}
