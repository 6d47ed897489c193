//! The sync controller
//!
//! [`BoardSync::run`] consumes the unified navigation stream and spawns one
//! activation per event. A navigation event supersedes a predecessor that
//! is still waiting for its board root; an activation that reached the
//! observing stage persists until the host detaches its root, and the
//! processed-set claim on the root keeps re-entrant events from attaching
//! twice.
//!
//! Styling passes mark every card before any asynchronous work is
//! dispatched, so concurrent passes can never style the same node twice.

use crate::adapter::{BoardAdapter, CardRef, VariantAdapter};
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::poll::poll_until;
use crate::processed::ProcessedSet;
use crate::route::detect_project;
use crate::state::{validate_transition, SyncState};
use boardtint_color::LabelPalette;
use boardtint_dom::{Document, RouteChange, RouteEvents};
use futures::stream::{FuturesUnordered, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Reactive board-label recoloring controller
///
/// Owns the processed-set bookkeeping shared by all activations; the
/// document itself stays host-owned behind the [`Document`] contract.
#[derive(Debug)]
pub struct BoardSync<D: Document> {
    document: Arc<D>,
    config: SyncConfig,
    processed: Arc<Mutex<ProcessedSet>>,
}

impl<D: Document> BoardSync<D> {
    /// Create a controller over a host document
    #[must_use]
    pub fn new(document: Arc<D>, config: SyncConfig) -> Self {
        Self {
            document,
            config,
            processed: Arc::new(Mutex::new(ProcessedSet::new())),
        }
    }

    /// Drive the controller from the unified navigation stream
    ///
    /// Returns once the stream closes. Activations already observing a
    /// board keep running until the host detaches their root.
    pub async fn run(self, mut events: RouteEvents) {
        let mut supersede: Option<oneshot::Sender<()>> = None;
        while let Some(change) = events.recv().await {
            if let Some(pending) = supersede.take() {
                let _ = pending.send(());
            }
            let (cancel, cancelled) = oneshot::channel();
            supersede = Some(cancel);

            let activation = Activation {
                document: Arc::clone(&self.document),
                config: self.config.clone(),
                processed: Arc::clone(&self.processed),
            };
            tokio::spawn(async move {
                if let Err(error) = activation.drive(change, cancelled).await {
                    tracing::warn!(%error, "sync activation aborted");
                }
            });
        }
    }
}

/// One navigation event's worth of work
struct Activation<D: Document> {
    document: Arc<D>,
    config: SyncConfig,
    processed: Arc<Mutex<ProcessedSet>>,
}

impl<D: Document> Activation<D> {
    async fn drive(
        self,
        change: RouteChange,
        mut superseded: oneshot::Receiver<()>,
    ) -> Result<(), SyncError> {
        let state = SyncState::Idle;
        let Some(context) = detect_project(&change.path) else {
            tracing::debug!(path = %change.path, "route skipped");
            return Ok(());
        };
        let state = advance(state, SyncState::Detecting)?;
        tracing::debug!(key = %context.key, variant = ?context.variant, "project detected");

        let adapter = VariantAdapter::for_context(&context, &self.config);
        let document = self.document.as_ref();
        let root = tokio::select! {
            _ = &mut superseded => {
                advance(state, SyncState::Idle)?;
                tracing::debug!(path = %change.path, "detection superseded");
                return Ok(());
            }
            root = poll_until(self.config.poll_interval, || adapter.locate_root(document)) => root,
        };
        let state = advance(state, SyncState::Attaching)?;
        tracing::debug!(%root, "board element found");

        if !self.processed.lock().mark(root) {
            advance(state, SyncState::Terminal)?;
            tracing::debug!(%root, "board already claimed");
            return Ok(());
        }

        // subscribe before the first pass so insertions landing mid-pass
        // are never missed; passes are idempotent
        let mut mutations = self.document.watch_subtree(root);
        let state = advance(state, SyncState::Observing)?;
        self.update_cards(&adapter).await;

        while let Some(batch) = mutations.recv().await {
            if batch.has_additions() {
                self.update_cards(&adapter).await;
            }
        }
        advance(state, SyncState::Terminal)?;
        Ok(())
    }

    async fn update_cards(&self, adapter: &VariantAdapter) {
        let document = self.document.as_ref();
        let cards = adapter.list_cards(document);
        let fresh: Vec<CardRef> = {
            let mut processed = self.processed.lock();
            processed.prune(document);
            cards
                .into_iter()
                .filter(|card| processed.mark(card.element))
                .collect()
        };
        let mut styling: FuturesUnordered<_> = fresh
            .into_iter()
            .map(|card| self.style_card(adapter, card))
            .collect();
        while styling.next().await.is_some() {}
    }

    async fn style_card(&self, adapter: &VariantAdapter, card: CardRef) {
        let document = self.document.as_ref();
        let labels: Vec<(String, LabelPalette)> = adapter
            .extract_labels(document, &card)
            .into_iter()
            .map(|label| {
                let palette = LabelPalette::for_label(&label);
                (label, palette)
            })
            .collect();
        adapter.apply_label_style(document, &card, &labels);
        tracing::debug!(key = %card.key, labels = labels.len(), "card updated");
    }
}

fn advance(from: SyncState, to: SyncState) -> Result<SyncState, SyncError> {
    validate_transition(from, to)?;
    tracing::debug!(?from, ?to, "sync state advanced");
    Ok(to)
}
