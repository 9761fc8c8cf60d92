//! Sign-in controller state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SignInPage` keeps one `RwSignal<SignInState>` and feeds it the results of
//! the async collaborators (config load, query params, `POST /c/login`). All
//! branching lives here so it can be exercised without a browser.
//!
//! STATUS FLOW
//! ===========
//! `Normal -> OnGoing` on submit. A successful submit leaves the status at
//! `OnGoing`: the submit button stays disabled while the router navigates
//! away, which prevents a second navigation. A failed submit moves to
//! `Error`, and the next form edit moves `Error -> Normal`.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use crate::net::types::{AppConfig, AuthMode, Credential, SignInError, SkinConfig};

/// Route the console lands on when no `redirect_url` was captured.
pub const DEFAULT_LANDING_ROUTE: &str = "/harbor";

const DEFAULT_APP_TITLE: &str = "Harbor";
const ADMIRAL_APP_TITLE: &str = "vSphere Integrated Containers";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignInStatus {
    #[default]
    Normal,
    OnGoing,
    Error,
}

/// What the page must do after a failed submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Full-page load of an external identity provider URL.
    ExternalRedirect(String),
    /// Status is now `Error`; show the banner.
    ShowError,
}

#[derive(Clone, Debug, Default)]
pub struct SignInState {
    pub status: SignInStatus,
    pub credential: Credential,
    pub config: AppConfig,
    pub skin: Option<SkinConfig>,
    redirect_url: Option<String>,
    redirect_captured: bool,
}

impl SignInState {
    pub fn new(skin: Option<SkinConfig>) -> Self {
        Self { skin, ..Self::default() }
    }

    /// Record the `redirect_url` query parameter. Only the first capture is
    /// kept, verbatim; a blank value means no target.
    pub fn capture_redirect(&mut self, raw: Option<&str>) {
        if self.redirect_captured {
            return;
        }
        self.redirect_captured = true;
        self.redirect_url = raw.filter(|url| !url.trim().is_empty()).map(str::to_owned);
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    /// Replace the bootstrap options once `/api/systeminfo` answers.
    pub fn apply_config(&mut self, config: AppConfig) {
        self.config = config;
    }

    /// Enter `OnGoing`. Returns `false` when a submit is already in flight,
    /// in which case the caller must not call the auth endpoint.
    pub fn begin(&mut self) -> bool {
        if self.is_on_going() {
            return false;
        }
        self.status = SignInStatus::OnGoing;
        true
    }

    /// Consume the redirect target after a successful submit.
    pub fn complete(&mut self) -> String {
        self.redirect_url.take().unwrap_or_else(|| DEFAULT_LANDING_ROUTE.to_owned())
    }

    /// Route a failed submit.
    ///
    /// Under OIDC a 403 carries the identity provider URL; when it can be
    /// extracted the status is left untouched and the page redirects. Every
    /// other failure, including a 403 whose body yields no location, sets
    /// `Error`.
    pub fn fail(&mut self, err: &SignInError) -> FailureOutcome {
        if self.is_oidc_login_mode() && err.status == 403 {
            if let Some(location) = err.redirect_location() {
                log::debug!("OIDC sign-in redirecting to {location}");
                return FailureOutcome::ExternalRedirect(location);
            }
        }
        self.status = SignInStatus::Error;
        log::error!("An error occurred when signing in: {}", err.diagnostic());
        FailureOutcome::ShowError
    }

    /// Called on every form edit: `Error` falls back to `Normal`.
    pub fn update_state(&mut self) {
        if self.status == SignInStatus::Error {
            self.status = SignInStatus::Normal;
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == SignInStatus::Error
    }

    pub fn is_on_going(&self) -> bool {
        self.status == SignInStatus::OnGoing
    }

    pub fn is_valid(&self) -> bool {
        self.credential.is_complete()
    }

    pub fn self_sign_up(&self) -> bool {
        self.config.auth_mode == AuthMode::DbAuth && self.config.self_registration
    }

    pub fn is_oidc_login_mode(&self) -> bool {
        self.config.auth_mode == AuthMode::OidcAuth
    }

    pub fn show_forget_pwd(&self) -> bool {
        !matches!(
            self.config.auth_mode,
            AuthMode::LdapAuth | AuthMode::UaaAuth | AuthMode::OidcAuth | AuthMode::HttpAuth
        )
    }

    /// Product title: skin override first, then the Admiral flag.
    pub fn app_title(&self) -> String {
        if let Some(title) = self.skin.as_ref().and_then(|s| s.app_title.as_deref()) {
            return title.to_owned();
        }
        let title = if self.config.with_admiral { ADMIRAL_APP_TITLE } else { DEFAULT_APP_TITLE };
        title.to_owned()
    }

    /// Inline `background-image` declaration for a skinned login page.
    pub fn background_style(&self) -> Option<String> {
        self.skin
            .as_ref()
            .and_then(|s| s.login_bg_img.as_deref())
            .filter(|img| !img.is_empty())
            .map(|img| format!("background-image: url('{img}')"))
    }
}
