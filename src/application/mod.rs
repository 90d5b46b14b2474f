//! Application layer services implementing business logic.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Registration and resolution
//! - [`services::access_service::AccessService`] - Whitelist and password gate

pub mod services;
