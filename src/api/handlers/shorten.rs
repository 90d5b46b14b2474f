//! Handler for the registration endpoint.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::api::dto::shorten::{OutputFormat, ShortenQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or finds) the short link for a destination URL.
///
/// # Endpoint
///
/// `GET /?url=https://…&format=text|json|xml&password=…`
///
/// Registration is idempotent: repeating a URL returns the code of the
/// existing record. The short URL is rendered as plain text, JSON, XML,
/// or an HTML anchor depending on `format`.
///
/// # Errors
///
/// Returns 404 without a `url` parameter, 403 when the password gate
/// rejects, and 400 for destination URLs that are not absolute http(s).
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<Response, AppError> {
    let Some(url) = query.url else {
        return Err(AppError::not_found("Not found", json!({})));
    };

    state
        .access_service
        .check_password(query.password.as_deref())?;

    let code = state.shortener_service.register(&url).await?;
    let short_url = state.shortener_service.short_url(&code);

    Ok(render(query.format, &short_url))
}

fn render(format: OutputFormat, short_url: &str) -> Response {
    match format {
        OutputFormat::Text => short_url.to_string().into_response(),
        OutputFormat::Json => Json(json!({ "url": short_url })).into_response(),
        OutputFormat::Xml => (
            [(header::CONTENT_TYPE, "application/xml")],
            format!(
                "<?xml version=\"1.0\"?>\n<response>\n  <url>{}</url>\n</response>",
                escape_markup(short_url)
            ),
        )
            .into_response(),
        OutputFormat::Html => {
            let escaped = escape_markup(short_url);
            Html(format!("<a href=\"{escaped}\">{escaped}</a>")).into_response()
        }
    }
}

/// Escapes the short URL for embedding in HTML/XML output. The URL is
/// built from configured values, but the markup stays safe for any
/// alphabet or hostname.
fn escape_markup(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
