//! Background worker persisting hit events.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::ShortLinkRepository;

/// Drains the hit channel and records each event against the store.
///
/// Failures are logged and swallowed: statistics must never fail a
/// redirect, and a hit for a record that has vanished is already a no-op
/// at the repository level. The worker exits when every sender has been
/// dropped.
pub async fn run_hit_worker<R: ShortLinkRepository>(
    mut rx: mpsc::Receiver<HitEvent>,
    repository: Arc<R>,
) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = repository
            .record_hit(event.link_id, event.accessed_at)
            .await
        {
            tracing::warn!("Failed to record hit for link {}: {}", event.link_id, e);
        }
    }
}
