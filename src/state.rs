use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AccessService, ShortenerService};
use crate::domain::hit_event::HitEvent;
use crate::infrastructure::persistence::PgShortLinkRepository;

/// Shared application state injected into all handlers.
///
/// Everything here is either immutable configuration or internally
/// synchronized, so clones can serve concurrent requests without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<PgShortLinkRepository>>,
    pub access_service: Arc<AccessService>,
    pub hit_sender: mpsc::Sender<HitEvent>,
    pub track_hits: bool,
    pub db: Arc<PgPool>,
}
