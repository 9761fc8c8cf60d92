//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::SkinConfig;
use crate::pages::{home::HomePage, sign_in::SignInPage};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the skin and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let skin = RwSignal::new(None::<SkinConfig>);
    let ui = RwSignal::new(UiState::default());

    provide_context(skin);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        skin.set(crate::net::api::load_skin_config().await);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/harbor-portal.css"/>
        <Title text="Harbor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("harbor") view=HomePage/>
                <Route path=(StaticSegment("harbor"), StaticSegment("sign-in")) view=SignInPage/>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
            </Routes>
        </Router>
    }
}
