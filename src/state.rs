//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream HTTP client and the skin setting read at startup;
//! nothing here changes after boot, so it is cloned freely.

use std::sync::Arc;

use portal_client::net::types::SkinConfig;

use crate::config::PortalConfig;

#[derive(Clone)]
pub struct AppState {
    pub core_url: Arc<str>,
    pub http: reqwest::Client,
    pub skin: Option<Arc<SkinConfig>>,
}

impl AppState {
    /// Build the shared state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(config: &PortalConfig, skin: Option<SkinConfig>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.proxy_timeout)
            .build()?;
        Ok(Self { core_url: Arc::from(config.core_url.as_str()), http, skin: skin.map(Arc::new) })
    }
}
