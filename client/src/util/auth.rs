//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes bounce unauthenticated visitors to the sign-in page and
//! pass their own path along so sign-in can send them back.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const SIGN_IN_ROUTE: &str = "/harbor/sign-in";

/// Whether a guarded route should leave for the sign-in page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Sign-in URL that returns to `return_to` after a successful sign-in.
pub fn sign_in_url(return_to: &str) -> String {
    if return_to.is_empty() {
        return SIGN_IN_ROUTE.to_owned();
    }
    format!("{SIGN_IN_ROUTE}?redirect_url={}", urlencoding::encode(return_to))
}

/// Navigate to sign-in whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, return_to: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let target = sign_in_url(return_to);
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(&target, NavigateOptions::default());
        }
    });
}
