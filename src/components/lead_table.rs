//! Lead Table Component
//!
//! Renders the store's lead list with loading and empty-state rows.

use leptos::prelude::*;

use lead_core::TableBody;

use crate::components::LeadRow;
use crate::context::use_page;
use crate::store::{PageState, PageStateStoreFields};

const COLUMN_COUNT: &str = "4";

#[component]
pub fn LeadTable() -> impl IntoView {
    let store = use_page().store;

    // Only a change of body kind rebuilds the branch; row edits go through <For>
    let body = Memo::new(move |_| store.with(PageState::table_body));

    view! {
        <table class="lead-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || match body.get() {
                    TableBody::Loading => view! {
                        <tr class="placeholder-row">
                            <td colspan=COLUMN_COUNT>"Loading leads…"</td>
                        </tr>
                    }.into_any(),
                    TableBody::Rows => view! {
                        <For
                            each=move || store.leads().get().unwrap_or_default()
                            key=|lead| lead.id.clone()
                            children=move |lead| view! { <LeadRow lead=lead /> }
                        />
                    }.into_any(),
                    TableBody::Empty => view! {
                        <tr class="placeholder-row">
                            <td colspan=COLUMN_COUNT>"No leads found"</td>
                        </tr>
                    }.into_any(),
                }}
            </tbody>
        </table>
        <p class="lead-count">
            {move || {
                let count = store.leads().with(|leads| leads.as_ref().map_or(0, Vec::len));
                format!("{} lead{}", count, if count == 1 { "" } else { "s" })
            }}
        </p>
    }
}
