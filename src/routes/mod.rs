//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the core-service passthrough and the skin setting
//! under a single Axum router with Leptos SSR rendering of the console.

pub mod proxy;
pub mod skin;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Passthrough, skin, health and root redirect; no Leptos configuration needed.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/c/{*rest}", any(proxy::forward))
        .route("/api/{*rest}", any(proxy::forward))
        .route("/setting.json", get(skin::setting))
        .route("/healthz", get(healthz))
        .route("/", get(redirect_root_to_console))
        .with_state(state)
}

async fn redirect_root_to_console() -> Redirect {
    Redirect::temporary("/harbor")
}

/// Full portal: API routes + Leptos SSR console + compiled bundle at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portal_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portal_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
