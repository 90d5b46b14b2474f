//! Short link entity representing a stored URL mapping.

use chrono::{DateTime, Utc};

/// A stored destination URL with its access statistics.
///
/// The store-assigned `id` is the value the codec turns into a short
/// code; it is unique and stable for the lifetime of the record. `hits`
/// and `accessed_at` are only ever mutated through
/// [`crate::domain::repositories::ShortLinkRepository::record_hit`].
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub accessed_at: Option<DateTime<Utc>>,
    pub hits: i64,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        url: String,
        created_at: DateTime<Utc>,
        accessed_at: Option<DateTime<Utc>>,
        hits: i64,
    ) -> Self {
        Self {
            id,
            url,
            created_at,
            accessed_at,
            hits,
        }
    }

    /// Returns true if the link has been resolved at least once.
    pub fn was_accessed(&self) -> bool {
        self.accessed_at.is_some()
    }
}
