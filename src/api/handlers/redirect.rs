//! Handler for short URL redirect.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::domain::hit_event::HitEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL with `301 Moved
/// Permanently`.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Unknown, malformed, and out-of-alphabet codes all answer with the
/// same 404 body. On success a hit event is queued for the background
/// worker; a full queue drops the event rather than delaying the
/// redirect.
///
/// # Errors
///
/// Returns 404 when the code does not resolve to a record.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.shortener_service.resolve(&code).await?;

    if state.track_hits {
        let _ = state.hit_sender.try_send(HitEvent::now(link.id));
    }

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, link.url)],
    ))
}
