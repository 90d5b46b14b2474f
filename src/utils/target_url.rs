//! Destination URL admission checks.
//!
//! Stored URLs are byte-significant: two spellings of the same location
//! are two different records. Validation therefore only gates the scheme
//! and host and never rewrites the input.

use url::Url;

/// Reasons a destination URL is refused.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Checks that `input` is an absolute http(s) URL with a host.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for unparseable input,
/// [`TargetUrlError::UnsupportedProtocol`] for schemes like `javascript:`
/// or `file:`, and [`TargetUrlError::MissingHost`] for host-less URLs.
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}
