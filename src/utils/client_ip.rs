//! Client IP resolution for access control.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Resolves the client address from the socket peer or, behind a trusted
/// reverse proxy, from forwarding headers.
///
/// `X-Forwarded-For` may carry a comma-separated chain; the first entry
/// is the originating client. Falls back to the peer address when the
/// headers are missing or unparseable.
pub fn client_ip(addr: SocketAddr, headers: &HeaderMap, behind_proxy: bool) -> IpAddr {
    if behind_proxy
        && let Some(ip) = forwarded_ip(headers)
    {
        return ip;
    }

    addr.ip()
}

fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    if let Some(ip) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok())
    {
        return Some(ip);
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
