//! Authenticated landing route (`/harbor`).
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where a sign-in without `redirect_url` ends up. It looks up the
//! current account and bounces back to sign-in when there is none.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::sign_in::DEFAULT_LANDING_ROUTE;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = RwSignal::new(AuthState::pending());
    install_unauth_redirect(auth, DEFAULT_LANDING_ROUTE, use_navigate());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState { user, loading: false });
    });

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            auth.update(|a| a.user = None);
            crate::util::browser::assign_location(crate::util::auth::SIGN_IN_ROUTE);
        });
    };

    let username = move || auth.with(|a| a.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    view! {
        <Show
            when=move || auth.with(|a| a.user.is_some())
            fallback=|| view! { <div class="home-page home-page--loading">"Loading..."</div> }
        >
            <div class="home-page">
                <p class="home-page__greeting">"Signed in as " <strong>{username}</strong></p>
                <button class="sign-in-button" on:click=on_sign_out>"Log out"</button>
            </div>
        </Show>
    }
}
