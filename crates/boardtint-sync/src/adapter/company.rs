//! Company-managed board adapter
//!
//! Cards carry their issue key as an attribute and render labels as a
//! comma-space-joined text inside a tooltip-flagged extra field. Styling
//! rebuilds that field: the text is cleared and one chip span is appended
//! per label.

use super::{BoardAdapter, CardRef};
use crate::config::SyncConfig;
use boardtint_color::LabelPalette;
use boardtint_dom::{style, Document, NodeId, NodeMatch};

/// Adapter for the company-managed layout
#[derive(Debug, Clone)]
pub struct CompanyManagedBoard {
    field_name: String,
    empty_value: String,
}

impl CompanyManagedBoard {
    /// Create the adapter with the configured label-field strings
    #[must_use]
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            field_name: config.labels_field_name.clone(),
            empty_value: config.labels_empty_value.clone(),
        }
    }

    fn label_field<D: Document>(&self, document: &D, card: NodeId) -> Option<NodeId> {
        document.query_first(
            card,
            &NodeMatch::new()
                .tag("span")
                .class("ghx-extra-field")
                .attr_prefix("data-tooltip", format!("{}:", self.field_name)),
        )
    }

    fn label_content<D: Document>(document: &D, field: NodeId) -> Option<NodeId> {
        document.query_first(
            field,
            &NodeMatch::new().tag("span").class("ghx-extra-field-content"),
        )
    }

    fn chip_style(palette: &LabelPalette) -> String {
        format!(
            "color: {}; background-color: {}; font-size: 10px; font-weight: bold; \
             white-space: nowrap; overflow: hidden; text-overflow: ellipsis; \
             border-radius: 48px; padding: 3px 8px; margin: 4px 0;",
            palette.foreground.css(),
            palette.background.css()
        )
    }
}

impl<D: Document> BoardAdapter<D> for CompanyManagedBoard {
    fn locate_root(&self, document: &D) -> Option<NodeId> {
        document.query_first(document.root(), &NodeMatch::new().id("ghx-work"))
    }

    fn list_cards(&self, document: &D) -> Vec<CardRef> {
        document
            .query(document.root(), &NodeMatch::new().class("ghx-issue"))
            .into_iter()
            .filter_map(|element| {
                let key = document.attribute(element, "data-issue-key")?;
                Some(CardRef { key, element })
            })
            .collect()
    }

    fn extract_labels(&self, document: &D, card: &CardRef) -> Vec<String> {
        let Some(field) = self.label_field(document, card.element) else {
            return Vec::new();
        };
        let empty_suffix = format!(": {}", self.empty_value);
        let is_empty = document
            .attribute(field, "data-tooltip")
            .is_some_and(|tooltip| tooltip.ends_with(&empty_suffix));
        if is_empty {
            return Vec::new();
        }
        let Some(content) = Self::label_content(document, field) else {
            return Vec::new();
        };
        document
            .text(content)
            .split(", ")
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn apply_label_style(&self, document: &D, card: &CardRef, labels: &[(String, LabelPalette)]) {
        let Some(field) = self.label_field(document, card.element) else {
            return;
        };
        if let Some(holder) = document.parent(field) {
            let grown =
                style::upsert_declaration(&document.inline_style(holder), "max-height", "fit-content");
            document.set_inline_style(holder, &grown);
        }
        if labels.is_empty() {
            return;
        }
        let Some(content) = Self::label_content(document, field) else {
            return;
        };
        document.set_text(content, "");
        document.set_inline_style(content, "display: flex; flex-wrap: wrap; gap: 4px;");
        for (label, palette) in labels {
            let chip = document.create_element("span");
            document.set_text(chip, label);
            document.set_inline_style(chip, &Self::chip_style(palette));
            document.append_child(content, chip);
        }
    }
}
