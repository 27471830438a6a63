//! Client-key derivation for the login rate limiter.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::HeaderMap;

/// The client network identifier used to key failed-login counters.
///
/// Derived from the first entry of `x-forwarded-for` when the header is
/// present (the entry is kept verbatim, surrounding whitespace included),
/// else the direct peer address.
#[derive(Debug, Clone)]
pub struct ClientKey(pub String);

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());
        Ok(ClientKey(derive_client_key(&parts.headers, peer)))
    }
}

/// Pick the rate-limit key from the forwarded-for header or the peer address.
fn derive_client_key(headers: &HeaderMap, peer: Option<String>) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        if let Some(first) = forwarded.split(',').next() {
            return first.to_string();
        }
    }
    peer.unwrap_or_else(|| "unknown".to_string())
}
