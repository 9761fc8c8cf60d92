//! REST helpers for the core service endpoints the console relies on.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so config/skin
//! fetch failures degrade UI behavior without crashing hydration. Sign-in
//! returns a typed [`SignInError`] because the page branches on its status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AppConfig, Credential, SignInError, SkinConfig, User};

pub const SIGN_IN_ENDPOINT: &str = "/c/login";
pub const SIGN_OUT_ENDPOINT: &str = "/c/log_out";
pub const OIDC_LOGIN_ENDPOINT: &str = "/c/oidc/login";
pub const SYSTEM_INFO_ENDPOINT: &str = "/api/systeminfo";
pub const CURRENT_USER_ENDPOINT: &str = "/api/users/current";
pub const SKIN_SETTING_ENDPOINT: &str = "/setting.json";

/// Form-encoded `principal=..&password=..` body for `POST /c/login`.
pub fn sign_in_form_body(credential: &Credential) -> String {
    format!(
        "principal={}&password={}",
        urlencoding::encode(&credential.principal),
        urlencoding::encode(&credential.password)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn config_load_failed_message(status: u16) -> String {
    format!("system info request failed: {status}")
}

/// Submit credentials via `POST /c/login`.
///
/// # Errors
///
/// Returns a [`SignInError`] carrying the HTTP status, status text and
/// classified body for non-2xx responses, or a transport error with status
/// `0` when no response arrived.
pub async fn sign_in(credential: &Credential) -> Result<(), SignInError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ErrorBody;

        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(sign_in_form_body(credential))
            .map_err(|e| SignInError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SignInError::transport(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let raw = resp.text().await.unwrap_or_default();
        Err(SignInError { status: resp.status(), status_text: resp.status_text(), body: ErrorBody::from_raw(&raw) })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
        Err(SignInError::transport("not available on server"))
    }
}

/// Fetch bootstrap options from `GET /api/systeminfo`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not decode.
pub async fn load_app_config() -> Result<AppConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SYSTEM_INFO_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(config_load_failed_message(resp.status()));
        }
        resp.json::<AppConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch branding overrides from `GET /setting.json`.
/// Returns `None` when no skin is deployed or it does not decode.
pub async fn load_skin_config() -> Option<SkinConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SKIN_SETTING_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        match resp.json::<SkinConfig>().await {
            Ok(skin) => Some(skin),
            Err(e) => {
                log::warn!("Ignoring malformed skin setting: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the signed-in account from `GET /api/users/current`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the session by calling `GET /c/log_out`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::get(SIGN_OUT_ENDPOINT).send().await;
    }
}
