//! Sign-in page for database, LDAP, UAA, HTTP and OIDC auth modes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds `SignInState` to the form and drives the async collaborators:
//! `/api/systeminfo` for the auth mode, `POST /c/login` for credentials, the
//! router for post-login navigation and a full-page redirect for OIDC.
//!
//! On load the page tries one sign-in with the empty form. An existing
//! OIDC/HTTP-auth session passes straight through; under OIDC a 403 sends the
//! browser to the identity provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::about_dialog::AboutDialog;
use crate::net::api::OIDC_LOGIN_ENDPOINT;
use crate::net::types::SkinConfig;
use crate::state::sign_in::SignInState;
use crate::state::ui::{ModalEvent, UiState};

const REDIRECT_QUERY_KEY: &str = "redirect_url";
const SIGN_UP_ROUTE: &str = "/harbor/sign-up";
const FORGOT_PASSWORD_ROUTE: &str = "/harbor/password-reset";

/// Start a sign-in unless one is already in flight.
fn submit_sign_in<F>(state: RwSignal<SignInState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut started = false;
    state.update(|s| started = s.begin());
    if !started {
        return;
    }
    let credential = state.with_untracked(|s| s.credential.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::sign_in::FailureOutcome;

        match crate::net::api::sign_in(&credential).await {
            Ok(()) => {
                if let Some(target) = state.try_update(SignInState::complete) {
                    navigate(&target, NavigateOptions::default());
                }
            }
            Err(err) => {
                if let Some(FailureOutcome::ExternalRedirect(location)) = state.try_update(|s| s.fail(&err)) {
                    crate::util::browser::assign_location(&location);
                }
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, navigate);
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let skin = expect_context::<RwSignal<Option<SkinConfig>>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let state = RwSignal::new(SignInState::new(skin.get_untracked()));
    state.update(|s| s.capture_redirect(query.with_untracked(|q| q.get(REDIRECT_QUERY_KEY)).as_deref()));

    // The skin file may land after the page mounts.
    Effect::new(move || {
        let latest = skin.get();
        state.update(|s| s.skin = latest);
    });

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::load_app_config().await {
                Ok(config) => state.update(|s| s.apply_config(config)),
                Err(e) => log::error!("Failed to load bootstrap options with error: {e}"),
            }
            submit_sign_in(state, navigate);
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            submit_sign_in(state, navigate.clone());
        }
    };

    let on_about = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.open_modal(ModalEvent::ABOUT));
    };
    let on_about_close = Callback::new(move |()| ui.update(UiState::close_about));

    view! {
        <div
            class="sign-in-page"
            style=move || state.with(SignInState::background_style).unwrap_or_default()
        >
            <div class="sign-in-card">
                <h1 class="sign-in-card__title">{move || state.with(SignInState::app_title)}</h1>
                <form class="sign-in-form" on:submit=on_submit>
                    <input
                        class="sign-in-input"
                        type="text"
                        name="login_username"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || state.with(|s| s.credential.principal.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| {
                                s.credential.principal = value;
                                s.update_state();
                            });
                        }
                    />
                    <input
                        class="sign-in-input"
                        type="password"
                        name="login_password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || state.with(|s| s.credential.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| {
                                s.credential.password = value;
                                s.update_state();
                            });
                        }
                    />
                    <Show when=move || state.with(SignInState::is_error)>
                        <p class="sign-in-error">"Invalid user name or password"</p>
                    </Show>
                    <button
                        class="sign-in-button"
                        type="submit"
                        disabled=move || state.with(|s| s.is_on_going() || !s.is_valid())
                    >
                        "Log in"
                    </button>
                </form>
                <Show when=move || state.with(SignInState::is_oidc_login_mode)>
                    <a class="sign-in-button sign-in-button--oidc" href=OIDC_LOGIN_ENDPOINT rel="external">
                        "Login via OIDC provider"
                    </a>
                </Show>
                <div class="sign-in-links">
                    <Show when=move || state.with(SignInState::self_sign_up)>
                        <a class="sign-in-link" href=SIGN_UP_ROUTE rel="external">"Sign up for an account"</a>
                    </Show>
                    <Show when=move || state.with(SignInState::show_forget_pwd)>
                        <a class="sign-in-link" href=FORGOT_PASSWORD_ROUTE rel="external">"Forgot password"</a>
                    </Show>
                    <a class="sign-in-link" href="#" on:click=on_about>"More info..."</a>
                </div>
            </div>
            <Show when=move || ui.with(|u| u.about_open)>
                <AboutDialog
                    title=Signal::derive(move || state.with(SignInState::app_title))
                    version=Signal::derive(move || state.with(|s| s.config.harbor_version.clone()))
                    on_close=on_about_close
                />
            </Show>
        </div>
    }
}
