//! Testing utilities for the Boardtint workspace
//!
//! Board fixtures over [`MemoryDocument`] shaped like the two host layouts,
//! plus async assertion helpers.

#![allow(missing_docs)]

use boardtint_dom::{Document, MemoryDocument, NodeId};
use std::time::{Duration, Instant};

/// Route to a team-managed board
pub fn team_route(key: &str) -> String {
    format!("/jira/core/projects/{key}/board")
}

/// Route to a company-managed board
pub fn company_route(key: &str, board: u32) -> String {
    format!("/jira/software/c/projects/{key}/boards/{board}")
}

/// Route to a company-managed backlog
pub fn company_backlog_route(key: &str, board: u32) -> String {
    format!("/jira/software/c/projects/{key}/boards/{board}/backlog")
}

/// Create an element and append it under `parent`
pub fn element(doc: &MemoryDocument, parent: NodeId, tag: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.append_child(parent, node);
    node
}

/// The company-managed work container (`#ghx-work`)
pub fn company_board(doc: &MemoryDocument) -> NodeId {
    let container = doc.create_element("div");
    doc.set_attribute(container, "id", "ghx-work");
    doc.append_child(doc.root(), container);
    container
}

/// One company-managed card with its label field
#[derive(Debug, Clone, Copy)]
pub struct CompanyCard {
    pub card: NodeId,
    pub field: NodeId,
    pub content: NodeId,
}

/// Build a company-managed card under `board`
///
/// The card subtree is assembled detached and appended whole, the way a
/// host inserts fully rendered cards — watchers see one complete card.
/// An empty `labels` slice renders the host's empty sentinel
/// (`Labels: None`).
pub fn company_card(
    doc: &MemoryDocument,
    board: NodeId,
    key: &str,
    labels: &[&str],
) -> CompanyCard {
    let card = doc.create_element("div");
    doc.set_attribute(card, "class", "ghx-issue");
    doc.set_attribute(card, "data-issue-key", key);

    let holder = element(doc, card, "div");
    let field = element(doc, holder, "span");
    doc.set_attribute(field, "class", "ghx-extra-field");
    let joined = if labels.is_empty() {
        "None".to_string()
    } else {
        labels.join(", ")
    };
    doc.set_attribute(field, "data-tooltip", &format!("Labels: {joined}"));

    let content = element(doc, field, "span");
    doc.set_attribute(content, "class", "ghx-extra-field-content");
    doc.set_text(content, &joined);

    doc.append_child(board, card);
    CompanyCard {
        card,
        field,
        content,
    }
}

/// The team-managed board fixture
#[derive(Debug, Clone, Copy)]
pub struct TeamBoard {
    pub main: NodeId,
    pub root: NodeId,
}

/// Build the team-managed scroll region (`#ak-main-content` with the nested
/// blocks whose last child hosts the cards)
///
/// Assembled detached and appended whole so the board root is only ever
/// observable in its final position.
pub fn team_board(doc: &MemoryDocument) -> TeamBoard {
    let main = doc.create_element("div");
    doc.set_attribute(main, "id", "ak-main-content");
    let mut block = main;
    for _ in 0..3 {
        block = element(doc, block, "div");
    }
    // a leading sibling so the board root is genuinely the last child
    element(doc, block, "div");
    let root = element(doc, block, "div");
    doc.append_child(doc.root(), main);
    TeamBoard { main, root }
}

/// One team-managed card with its key and label spans
#[derive(Debug, Clone)]
pub struct TeamCard {
    pub card: NodeId,
    pub key_span: NodeId,
    pub label_spans: Vec<NodeId>,
}

/// Build a team-managed draggable card under `root`
///
/// Assembled detached and appended whole, like [`company_card`].
pub fn team_card(doc: &MemoryDocument, root: NodeId, key: &str, labels: &[&str]) -> TeamCard {
    let card = doc.create_element("div");
    doc.set_attribute(card, "data-rbd-draggable-id", &format!("ISSUE::{key}"));

    let key_span = element(doc, card, "span");
    doc.set_text(key_span, key);

    let mut label_spans = Vec::new();
    if !labels.is_empty() {
        let block = element(doc, card, "div");
        doc.set_inline_style(block, "display: flex;");
        for label in labels {
            let span = element(doc, block, "span");
            doc.set_text(span, label);
            label_spans.push(span);
        }
    }

    doc.append_child(root, card);
    TeamCard {
        card,
        key_span,
        label_spans,
    }
}

/// Poll `condition` until it holds or `timeout` elapses
pub async fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
