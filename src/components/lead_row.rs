//! Lead Row Component

use leptos::prelude::*;

use lead_core::Lead;

use crate::context::use_page;

/// One table row: name, email, status badge, delete action
#[component]
pub fn LeadRow(lead: Lead) -> impl IntoView {
    let page = use_page();
    let id = lead.id.clone();
    let status_class = format!("status-badge {}", lead.status.css_class());

    view! {
        <tr class="lead-row">
            <td class="lead-name">{lead.name}</td>
            <td class="lead-email">{lead.email}</td>
            <td><span class=status_class>{lead.status.as_str()}</span></td>
            <td class="lead-actions">
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        page.remove(id.clone());
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
