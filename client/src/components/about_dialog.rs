//! "About" modal with product title and core service version.

use leptos::prelude::*;

const UNKNOWN_VERSION: &str = "unknown";

/// Version line shown in the dialog; blank versions read as unknown.
pub fn version_label(version: &str) -> String {
    let version = version.trim();
    format!("Version {}", if version.is_empty() { UNKNOWN_VERSION } else { version })
}

/// Fullscreen modal; backdrop click, the close button and Escape all close it.
#[component]
pub fn AboutDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] version: Signal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="about-dialog__backdrop" on:click=on_backdrop>
            <div
                class="about-dialog"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="about-dialog__header">
                    <h2>{move || title.get()}</h2>
                    <button class="about-dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <p class="about-dialog__version">{move || version_label(&version.get())}</p>
                <p class="about-dialog__copyright">"Copyright Project Harbor Authors"</p>
            </div>
        </div>
    }
}
