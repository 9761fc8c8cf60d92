//! Forwarding of `/c/*` and `/api/*` to the registry core service.
//!
//! The portal owns no authentication logic: sign-in, logout, OIDC and every
//! REST call go to the core unchanged. Redirects are handed back to the
//! browser rather than followed so OIDC `Location` headers survive.

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const FORWARDED_REQUEST_HEADERS: &[&str] = &[
    "content-type",
    "accept",
    "cookie",
    "authorization",
    "x-xsrftoken",
    "x-harbor-csrf-token",
];

const RETURNED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie", "location"];

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The request body exceeded the limit or could not be read.
    #[error("request body rejected")]
    BodyTooLarge,

    /// The core service did not answer.
    #[error("core service unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

pub(crate) fn upstream_url(core_url: &str, path_and_query: &str) -> String {
    format!("{core_url}{path_and_query}")
}

pub(crate) fn is_forwarded_request_header(name: &HeaderName) -> bool {
    FORWARDED_REQUEST_HEADERS.contains(&name.as_str())
}

pub(crate) fn is_returned_response_header(name: &HeaderName) -> bool {
    RETURNED_RESPONSE_HEADERS.contains(&name.as_str())
}

/// `ANY /c/{*rest}`, `ANY /api/{*rest}`: replay the request against the core.
///
/// # Errors
///
/// Returns `413` for an unreadable or oversized body and `502` when the core
/// cannot be reached.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or(parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.core_url, path_and_query);

    let body: Bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| ProxyError::BodyTooLarge)?;

    let mut upstream = state.http.request(parts.method.clone(), &url);
    for (name, value) in &parts.headers {
        if is_forwarded_request_header(name) {
            upstream = upstream.header(name, value);
        }
    }

    let resp = upstream.body(body).send().await.map_err(|e| {
        tracing::warn!(error = %e, upstream = %url, "core request failed");
        ProxyError::Upstream(e)
    })?;

    let status = resp.status();
    let mut headers = HeaderMap::new();
    for (name, value) in resp.headers() {
        if is_returned_response_header(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    let bytes = resp.bytes().await?;

    tracing::debug!(method = %parts.method, upstream = %url, status = status.as_u16(), "proxied");
    Ok((status, headers, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
