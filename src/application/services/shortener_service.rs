//! Short link registration and resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::codec::ShortCodec;
use crate::utils::target_url::validate_target_url;

/// Service implementing the find-or-create registration workflow and
/// code resolution.
///
/// Holds only immutable configuration (the codec and the public
/// hostname); all mutable state lives behind the repository, so a single
/// instance is shared freely across concurrent requests.
pub struct ShortenerService<R: ShortLinkRepository> {
    repository: Arc<R>,
    codec: ShortCodec,
    hostname: String,
}

impl<R: ShortLinkRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, codec: ShortCodec, hostname: impl Into<String>) -> Self {
        Self {
            repository,
            codec,
            hostname: hostname.into(),
        }
    }

    /// Returns the canonical short code for a destination URL, creating
    /// a record only when none exists.
    ///
    /// Lookup and insert are not atomic: two concurrent callers may both
    /// miss the lookup and race the insert. The store's unique constraint
    /// picks the winner; the loser's [`AppError::Conflict`] is consumed
    /// here by re-running the lookup, so both callers converge on the
    /// same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for URLs that are not absolute
    /// http(s), [`AppError::Internal`] on database errors.
    pub async fn register(&self, url: &str) -> Result<String, AppError> {
        validate_target_url(url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.repository.find_by_url(url).await? {
            return Ok(self.encode_id(existing.id));
        }

        match self.repository.insert(url, Utc::now()).await {
            Ok(id) => Ok(self.encode_id(id)),
            Err(AppError::Conflict { .. }) => {
                // Lost the race; the winner's record is authoritative.
                let existing = self.repository.find_by_url(url).await?.ok_or_else(|| {
                    AppError::internal("Conflicting record disappeared", json!({ "url": url }))
                })?;
                Ok(self.encode_id(existing.id))
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code to its stored record.
    ///
    /// Codes that fail to decode — characters outside the alphabet, or a
    /// value with no recoverable identifier — are reported exactly like
    /// codes with no matching record, so callers cannot distinguish
    /// malformed from unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for every undecodable or unknown
    /// code, [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let raw = match self.codec.decode_code(code) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Rejected code {code:?}: {e}");
                return Err(Self::unknown_code(code));
            }
        };

        // Decoded values are untrusted; anything outside the store's id
        // range cannot match a record.
        let id = i64::try_from(raw).map_err(|_| Self::unknown_code(code))?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::unknown_code(code))
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.hostname.trim_end_matches('/'), code)
    }

    fn encode_id(&self, id: i64) -> String {
        // Store identifiers are non-negative by schema.
        self.codec.encode_id(id as u64)
    }

    fn unknown_code(code: &str) -> AppError {
        AppError::not_found("Short link not found", json!({ "code": code }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use crate::utils::alphabet::{Alphabet, DEFAULT_CHARS};
    use mockall::Sequence;

    fn plain_codec() -> ShortCodec {
        ShortCodec::new(Alphabet::new(DEFAULT_CHARS).unwrap(), "", 0)
    }

    fn salted_codec() -> ShortCodec {
        ShortCodec::new(Alphabet::new(DEFAULT_CHARS).unwrap(), "secret", 3)
    }

    fn test_link(id: i64, url: &str) -> ShortLink {
        ShortLink::new(id, url.to_string(), Utc::now(), None, 0)
    }

    fn service(repo: MockShortLinkRepository) -> ShortenerService<MockShortLinkRepository> {
        ShortenerService::new(Arc::new(repo), plain_codec(), "https://sho.rt")
    }

    #[tokio::test]
    async fn test_register_creates_missing_url() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_url()
            .withf(|url| url == "https://example.com/page")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|url, _| url == "https://example.com/page")
            .times(1)
            .returning(|_, _| Ok(42));

        let result = service(repo).register("https://example.com/page").await;

        // 42 encodes to the single base-62 character 'Q'.
        assert_eq!(result.unwrap(), "Q");
    }

    #[tokio::test]
    async fn test_register_returns_existing_code() {
        let mut repo = MockShortLinkRepository::new();

        let existing = test_link(5, "https://example.com");
        repo.expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_insert().times(0);

        let result = service(repo).register("https://example.com").await;

        assert_eq!(result.unwrap(), "f");
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let mut repo = MockShortLinkRepository::new();
        let mut seq = Sequence::new();

        repo.expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(9));
        let existing = test_link(9, "https://example.com");
        repo.expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(existing.clone())));

        let service = service(repo);
        let first = service.register("https://example.com").await.unwrap();
        let second = service.register("https://example.com").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_register_recovers_from_insert_race() {
        let mut repo = MockShortLinkRepository::new();
        let mut seq = Sequence::new();

        repo.expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": "urls_url_key" }),
                ))
            });
        let winner = test_link(7, "https://example.com");
        repo.expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(winner.clone())));

        let result = service(repo).register("https://example.com").await;

        assert_eq!(result.unwrap(), "h");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_url() {
        let repo = MockShortLinkRepository::new();

        let result = service(repo).register("not-a-url").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_rejects_dangerous_scheme() {
        let repo = MockShortLinkRepository::new();

        let result = service(repo).register("javascript:alert(1)").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_resolve_returns_record() {
        let mut repo = MockShortLinkRepository::new();

        let link = test_link(1, "https://example.com/target");
        repo.expect_find_by_id()
            .withf(|&id| id == 1)
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let result = service(repo).resolve("b").await.unwrap();

        assert_eq!(result.url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = service(repo).resolve("zzzzzz").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_invalid_characters_is_not_found() {
        let mut repo = MockShortLinkRepository::new();
        // Undecodable codes never reach the store.
        repo.expect_find_by_id().times(0);

        let result = service(repo).resolve("!!!").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_salted_round_trip() {
        let mut repo = MockShortLinkRepository::new();

        let link = test_link(42, "https://example.com");
        repo.expect_find_by_id()
            .withf(|&id| id == 42)
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service =
            ShortenerService::new(Arc::new(repo), salted_codec(), "https://sho.rt");
        let code = salted_codec().encode_id(42);

        let result = service.resolve(&code).await.unwrap();

        assert_eq!(result.id, 42);
    }

    #[tokio::test]
    async fn test_resolve_salted_truncated_value_is_not_found() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_find_by_id().times(0);

        let service =
            ShortenerService::new(Arc::new(repo), salted_codec(), "https://sho.rt");

        // "a" decodes to 0, which has no digits left after the seed prefix.
        let result = service.resolve("a").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_short_url_joins_hostname_and_code() {
        let repo = MockShortLinkRepository::new();
        let service = ShortenerService::new(
            Arc::new(repo),
            plain_codec(),
            "https://sho.rt/",
        );

        assert_eq!(service.short_url("Q"), "https://sho.rt/Q");
    }
}
