//! Hit event model for asynchronous access tracking.

use chrono::{DateTime, Utc};

/// An in-memory record of one successful resolution, queued for async
/// persistence.
///
/// Created in the redirect handler and sent over a bounded channel to
/// [`crate::domain::hit_worker::run_hit_worker`], decoupling the redirect
/// response from the statistics write. The access time is captured at
/// resolution, not at persistence, so queue latency does not skew it.
#[derive(Debug, Clone)]
pub struct HitEvent {
    pub link_id: i64,
    pub accessed_at: DateTime<Utc>,
}

impl HitEvent {
    /// Creates a hit event stamped with the current time.
    pub fn now(link_id: i64) -> Self {
        Self {
            link_id,
            accessed_at: Utc::now(),
        }
    }
}
