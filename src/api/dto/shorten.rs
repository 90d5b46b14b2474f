//! DTOs for the registration endpoint.

use serde::Deserialize;

/// Query parameters of the registration endpoint.
#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    /// Destination URL to shorten.
    pub url: Option<String>,

    /// Output rendering; HTML anchor when omitted.
    #[serde(default)]
    pub format: OutputFormat,

    /// Registration password, when the deployment configures one.
    pub password: Option<String>,
}

/// Render format for the created short URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
    Xml,
}
