//! Lead Form Component
//!
//! Add-lead form bound to the page draft. Validation runs on submit; each
//! field's message disappears as soon as that field is edited again.

use leptos::prelude::*;

use lead_core::{LeadField, LeadStatus};

use crate::context::use_page;
use crate::store::PageStateStoreFields;

#[component]
pub fn LeadForm() -> impl IntoView {
    let page = use_page();
    let store = page.store;

    let field_error = move |field: LeadField| {
        move || {
            store
                .field_errors()
                .with(|errors| errors.get(field).map(str::to_string))
                .map(|msg| view! { <span class="field-error">{msg}</span> })
        }
    };

    let edit = move |field: LeadField, value: String| page.edit_field(field, value);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.submit_draft();
    };

    view! {
        <form class="lead-form" on:submit=on_submit novalidate=true>
            <label class="form-field">
                <span class="form-label">"Name"</span>
                <input
                    type="text"
                    name="name"
                    placeholder="Lead name"
                    prop:value=move || store.draft().with(|d| d.name.clone())
                    on:input=move |ev| edit(LeadField::Name, event_target_value(&ev))
                />
                {field_error(LeadField::Name)}
            </label>

            <label class="form-field">
                <span class="form-label">"Email"</span>
                <input
                    type="email"
                    name="email"
                    placeholder="name@company.com"
                    prop:value=move || store.draft().with(|d| d.email.clone())
                    on:input=move |ev| edit(LeadField::Email, event_target_value(&ev))
                />
                {field_error(LeadField::Email)}
            </label>

            <label class="form-field">
                <span class="form-label">"Status"</span>
                <select
                    name="status"
                    prop:value=move || store.draft().with(|d| d.status.clone())
                    on:change=move |ev| edit(LeadField::Status, event_target_value(&ev))
                >
                    <option value="">"Select status"</option>
                    {LeadStatus::ALL.iter().map(|status| view! {
                        <option value=status.as_str()>{status.as_str()}</option>
                    }).collect_view()}
                </select>
                {field_error(LeadField::Status)}
            </label>

            <div class="form-actions">
                <button type="button" class="btn-secondary" on:click=move |_| page.close_modal()>
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || store.submitting().get()
                >
                    {move || if store.submitting().get() { "Adding…" } else { "Add Lead" }}
                </button>
            </div>
        </form>
    }
}
