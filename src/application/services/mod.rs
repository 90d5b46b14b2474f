//! Business logic services for the application layer.

pub mod access_service;
pub mod shortener_service;

pub use access_service::AccessService;
pub use shortener_service::ShortenerService;
