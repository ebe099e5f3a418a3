//! Lead List Mutations
//!
//! The page keeps the last fetched sequence and only ever appends created
//! leads or drops deleted ones; order is whatever the server returned.

use crate::models::Lead;

/// Append a lead returned by a successful create.
///
/// An unset list (fetch never succeeded) becomes a one-element list.
pub fn append_created(leads: &mut Option<Vec<Lead>>, lead: Lead) {
    leads.get_or_insert_with(Vec::new).push(lead);
}

/// Remove every lead with `id`. Returns how many were removed.
pub fn remove_by_id(leads: &mut Option<Vec<Lead>>, id: &str) -> usize {
    match leads {
        Some(list) => {
            let before = list.len();
            list.retain(|lead| lead.id != id);
            before - list.len()
        }
        None => 0,
    }
}
