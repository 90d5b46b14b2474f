//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for short link records.
///
/// The store is the sole synchronization point of the system: identifier
/// assignment, URL uniqueness, and hit counters all live behind this
/// trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new URL record and returns the store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when a record for this exact URL
    /// already exists — including one created by a concurrent caller
    /// between a lookup and this insert. Returns [`AppError::Internal`]
    /// on database errors.
    async fn insert(&self, url: &str, created_at: DateTime<Utc>) -> Result<i64, AppError>;

    /// Finds a record by its exact destination URL.
    ///
    /// No normalization is applied: trailing slashes, scheme case, and
    /// query-parameter order are all significant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a record by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError>;

    /// Increments the hit counter and stamps the access time.
    ///
    /// A record that no longer exists is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_hit(&self, id: i64, accessed_at: DateTime<Utc>) -> Result<(), AppError>;
}
