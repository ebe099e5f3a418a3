//! Lead Desk App
//!
//! Single page: lead table, add-lead modal and the page error banner.

use leptos::prelude::*;

use crate::components::{ErrorBanner, LeadForm, LeadTable, Modal};
use crate::context::PageContext;
use crate::store::PageStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let page = PageContext::new();
    let store = page.store;

    // Provide context to all children
    provide_context(page);

    // Load leads on mount
    Effect::new(move |_| {
        page.fetch_all();
    });

    let banner_message = move || store.banner().with(|banner| banner.message().map(str::to_string));
    let page_error = Signal::derive(move || if store.modal_open().get() { None } else { banner_message() });
    let modal_error = Signal::derive(move || if store.modal_open().get() { banner_message() } else { None });

    view! {
        <main class="leads-page">
            <header class="page-header">
                <h1>"Leads"</h1>
                <button type="button" class="btn-primary" on:click=move |_| page.open_modal()>
                    "Add Lead"
                </button>
            </header>

            <ErrorBanner message=page_error />

            <LeadTable />

            <Modal
                open=Signal::derive(move || store.modal_open().get())
                on_close=move |_| page.close_modal()
                title="Add Lead"
            >
                <ErrorBanner message=modal_error />
                <LeadForm />
            </Modal>
        </main>
    }
}
