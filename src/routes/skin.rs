//! Skin setting file (`GET /setting.json`).
//!
//! The file is read once at startup. A missing or malformed file is logged
//! and treated as "no skin": the console falls back to its stock branding.

use std::path::Path;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use portal_client::net::types::SkinConfig;

use crate::state::AppState;

/// Parse a skin setting document.
pub(crate) fn parse_skin(raw: &str) -> Result<SkinConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Load the skin setting at `path`, logging and dropping any failure.
pub async fn load_skin(path: Option<&Path>) -> Option<SkinConfig> {
    let path = path?;
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "skin setting unreadable; using stock branding");
            return None;
        }
    };
    match parse_skin(&raw) {
        Ok(skin) => {
            tracing::info!(path = %path.display(), "skin setting loaded");
            Some(skin)
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "skin setting malformed; using stock branding");
            None
        }
    }
}

/// `GET /setting.json`: the startup skin, or `404` when there is none.
pub async fn setting(State(state): State<AppState>) -> Response {
    match &state.skin {
        Some(skin) => Json(skin.as_ref().clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
#[path = "skin_test.rs"]
mod tests;
