//! End-to-end flows for the company-managed board layout.
//!
//! These exercise the controller against the in-memory document the way the
//! host drives it: a navigation event arrives, the board renders, cards are
//! styled exactly once, and later insertions are picked up by the observer.

use boardtint_color::LabelPalette;
use boardtint_dom::{style, Document, MemoryDocument, NavigationHub};
use boardtint_sync::{BoardSync, SyncConfig};
use boardtint_test_utils::{company_backlog_route, company_board, company_card, company_route, wait_until};
use std::sync::Arc;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(2);

fn fast_config() -> SyncConfig {
    SyncConfig::new().with_poll_interval(Duration::from_millis(2))
}

fn start(doc: &Arc<MemoryDocument>) -> NavigationHub {
    let (hub, events) = NavigationHub::new();
    let sync = BoardSync::new(Arc::clone(doc), fast_config());
    tokio::spawn(sync.run(events));
    hub
}

/// Tenet: labels are rebuilt as chips carrying the hash-derived palette, so
/// equal label text always renders with equal colors.
#[tokio::test]
async fn labels_are_rebuilt_as_palette_chips() {
    let doc = Arc::new(MemoryDocument::new());
    let board = company_board(&doc);
    let fixture = company_card(&doc, board, "XYZ-1", &["bug", "infra"]);

    let hub = start(&doc);
    hub.pushed(&company_route("XYZ", 42));

    assert!(
        wait_until(DEADLINE, || doc.children(fixture.content).len() == 2).await,
        "chips were not created"
    );

    let chips = doc.children(fixture.content);
    assert_eq!(doc.text(chips[0]), "bug");
    assert_eq!(doc.text(chips[1]), "infra");

    let bug = LabelPalette::for_label("bug");
    let chip_style = doc.inline_style(chips[0]);
    assert!(style::declares(&chip_style, "color", &bug.foreground.css()));
    assert!(style::declares(&chip_style, "background-color", &bug.background.css()));

    assert!(style::declares(&doc.inline_style(fixture.content), "display", "flex"));
    let holder = doc.parent(fixture.field).unwrap();
    assert!(style::declares(&doc.inline_style(holder), "max-height", "fit-content"));
}

/// Tenet: identical label text on different cards gets identical colors.
#[tokio::test]
async fn identical_labels_share_colors_across_cards() {
    let doc = Arc::new(MemoryDocument::new());
    let board = company_board(&doc);
    let first = company_card(&doc, board, "XYZ-1", &["bug"]);
    let second = company_card(&doc, board, "XYZ-2", &["bug"]);

    let hub = start(&doc);
    hub.pushed(&company_route("XYZ", 42));

    assert!(
        wait_until(DEADLINE, || {
            doc.children(first.content).len() == 1 && doc.children(second.content).len() == 1
        })
        .await
    );

    let chip_a = doc.children(first.content)[0];
    let chip_b = doc.children(second.content)[0];
    assert_eq!(doc.inline_style(chip_a), doc.inline_style(chip_b));
}

/// Tenet: the empty sentinel means zero labels — no chips are created, but
/// the card still counts as processed (its field holder is adjusted).
#[tokio::test]
async fn empty_sentinel_creates_no_chips() {
    let doc = Arc::new(MemoryDocument::new());
    let board = company_board(&doc);
    let fixture = company_card(&doc, board, "XYZ-1", &[]);
    let holder = doc.parent(fixture.field).unwrap();

    let hub = start(&doc);
    hub.pushed(&company_route("XYZ", 7));

    assert!(
        wait_until(DEADLINE, || {
            style::declares(&doc.inline_style(holder), "max-height", "fit-content")
        })
        .await,
        "card was never processed"
    );

    assert_eq!(doc.text(fixture.content), "None");
    assert!(doc.children(fixture.content).is_empty());
}

/// Tenet: cards inserted after attach are styled by the observer, and cards
/// already processed are never touched again.
#[tokio::test]
async fn late_insertions_are_styled_once() {
    let doc = Arc::new(MemoryDocument::new());
    let board = company_board(&doc);
    let first = company_card(&doc, board, "XYZ-1", &["bug"]);

    let hub = start(&doc);
    hub.pushed(&company_route("XYZ", 42));
    assert!(wait_until(DEADLINE, || doc.children(first.content).len() == 1).await);

    // let the insertion batches from our own chips drain
    tokio::time::sleep(Duration::from_millis(50)).await;
    let first_chips = doc.children(first.content);

    let second = company_card(&doc, board, "XYZ-2", &["ops"]);
    assert!(
        wait_until(DEADLINE, || doc.children(second.content).len() == 1).await,
        "late card was not styled"
    );

    assert_eq!(doc.children(first.content), first_chips, "first card was rebuilt again");
}

/// Tenet: a pass over already-processed cards performs only reads. The
/// single counted mutation is the unrelated insertion that triggered it.
#[tokio::test]
async fn processed_cards_cost_zero_mutations() {
    let doc = Arc::new(MemoryDocument::new());
    let board = company_board(&doc);
    let fixture = company_card(&doc, board, "XYZ-1", &["bug"]);

    let hub = start(&doc);
    hub.pushed(&company_route("XYZ", 42));
    assert!(wait_until(DEADLINE, || doc.children(fixture.content).len() == 1).await);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let settled = doc.mutation_count();
    let filler = doc.create_element("div");
    doc.append_child(board, filler);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(doc.mutation_count(), settled + 1);
}

/// Tenet: a route outside the contract performs zero document mutations.
#[tokio::test]
async fn non_board_route_mutates_nothing() {
    let doc = Arc::new(MemoryDocument::new());
    let board = company_board(&doc);
    company_card(&doc, board, "XYZ-1", &["bug"]);
    let baseline = doc.mutation_count();

    let hub = start(&doc);
    hub.pushed("/jira/software/c/projects/XYZ/summary");
    hub.pushed("/jira/core/projects/ABC/summary");

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(doc.mutation_count(), baseline);
}

/// Tenet: the backlog route drives the same company-managed flow.
#[tokio::test]
async fn backlog_route_is_company_managed() {
    let doc = Arc::new(MemoryDocument::new());
    let board = company_board(&doc);
    let fixture = company_card(&doc, board, "XYZ-3", &["ops"]);

    let hub = start(&doc);
    hub.pushed(&company_backlog_route("XYZ", 42));

    assert!(wait_until(DEADLINE, || doc.children(fixture.content).len() == 1).await);
}

/// Tenet: the board root may render well after navigation; the poll keeps
/// retrying until it exists.
#[tokio::test]
async fn board_rendering_after_navigation_is_found() {
    let doc = Arc::new(MemoryDocument::new());
    let hub = start(&doc);
    hub.pushed(&company_route("XYZ", 42));

    tokio::time::sleep(Duration::from_millis(30)).await;
    let board = company_board(&doc);
    let fixture = company_card(&doc, board, "XYZ-1", &["bug"]);

    assert!(wait_until(DEADLINE, || doc.children(fixture.content).len() == 1).await);
}
