//! PostgreSQL repository implementations.

pub mod pg_short_link_repository;

pub use pg_short_link_repository::PgShortLinkRepository;
