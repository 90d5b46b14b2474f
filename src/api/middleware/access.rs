//! IP whitelist middleware for the registration route.

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Rejects callers whose address is not in the configured whitelist.
///
/// The address comes from the peer socket, or from forwarding headers
/// when the service is deployed behind a trusted reverse proxy. An empty
/// whitelist admits everyone; see
/// [`crate::application::services::AccessService`].
///
/// # Errors
///
/// Returns `403 Forbidden` for addresses outside a non-empty whitelist.
pub async fn layer(
    State(st): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip(addr, req.headers(), st.access_service.behind_proxy());

    st.access_service.check_ip(ip)?;

    Ok(next.run(req).await)
}
