//! Error Banner Component

use leptos::prelude::*;

/// Inline error message; renders nothing when there is no message
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="error-banner" role="alert">{msg}</div>
        })
    }
}
