//! Modal Dialog Component
//!
//! Overlay container that stays mounted while closed so the CSS transition
//! can play in both directions.

use leptos::prelude::*;

/// Generic modal overlay
///
/// # Arguments
/// * `open` - Whether the dialog is visible
/// * `on_close` - Called on backdrop click or the × button
/// * `title` - Optional header text
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || if open.get() { "modal-backdrop open" } else { "modal-backdrop" }
            aria-hidden=move || (!open.get()).to_string()
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
