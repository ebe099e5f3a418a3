//! Page Controller
//!
//! Owns the lead store plus the delete-error timer, and exposes the page
//! operations to child components via the Leptos Context API. State changes
//! are the `lead_core::page` transitions; this layer only runs the requests
//! and the timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use lead_core::page::{self, Submission, TimerAction};
use lead_core::{LeadField, DELETE_ERROR_TTL_MS};

use crate::api;
use crate::store::{store_apply, AppStore, PageState};

/// Page-wide state and actions provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    pub store: AppStore,
    /// Pending auto-clear of the delete error; dropping the handle cancels it
    error_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            store: AppStore::new(PageState::default()),
            error_timer: StoredValue::new_local(None),
        }
    }

    /// Load every lead, replacing the local list on success
    pub fn fetch_all(&self) {
        let store = self.store;
        store_apply(&store, page::on_fetch_start);
        spawn_local(async move {
            match api::list_leads().await {
                Ok(loaded) => {
                    log::info!("[LeadsPage] Loaded {} leads", loaded.len());
                    store_apply(&store, |state| page::on_fetch_ok(state, loaded));
                }
                Err(e) => {
                    log::error!("[LeadsPage] Error loading leads: {}", e);
                    store_apply(&store, |state| page::on_fetch_err(state, e.to_string()));
                }
            }
        });
    }

    pub fn edit_field(&self, field: LeadField, value: String) {
        store_apply(&self.store, |state| page::edit_field(state, field, value));
    }

    /// Validate the draft and, if it passes, send the create request
    pub fn submit_draft(&self) {
        match store_apply(&self.store, page::submit) {
            Some(submission) => self.create(submission),
            None => log::debug!("[LeadForm] Submit blocked"),
        }
    }

    /// Create a lead; the modal stays open on failure
    fn create(&self, submission: Submission) {
        let ctx = *self;
        let store = self.store;
        let Submission { lead: new_lead, session } = submission;
        spawn_local(async move {
            let action = match api::create_lead(&new_lead).await {
                Ok(lead) => {
                    log::info!("[LeadsPage] Created lead {}", lead.id);
                    store_apply(&store, |state| page::on_create_ok(state, session, lead))
                }
                Err(e) => {
                    log::warn!("[LeadsPage] Create failed: {}", e);
                    store_apply(&store, |state| page::on_create_err(state, session, e.to_string()))
                }
            };
            ctx.apply_timer(action);
        });
    }

    /// Delete a lead; a failure message clears itself after a few seconds
    pub fn remove(&self, id: String) {
        if id.is_empty() {
            return;
        }
        let ctx = *self;
        let store = self.store;
        spawn_local(async move {
            let action = match api::delete_lead(&id).await {
                Ok(()) => {
                    log::info!("[LeadsPage] Deleted lead {}", id);
                    store_apply(&store, |state| page::on_delete_ok(state, &id))
                }
                Err(e) => {
                    log::warn!("[LeadsPage] Delete of {} failed: {}", id, e);
                    let now = js_sys::Date::now() as u64;
                    store_apply(&store, |state| page::on_delete_err(state, e.to_string(), now))
                }
            };
            ctx.apply_timer(action);
        });
    }

    pub fn open_modal(&self) {
        let action = store_apply(&self.store, page::open_modal);
        self.apply_timer(action);
    }

    pub fn close_modal(&self) {
        let action = store_apply(&self.store, page::close_modal);
        self.apply_timer(action);
    }

    fn apply_timer(&self, action: TimerAction) {
        match action {
            TimerAction::Keep => {}
            TimerAction::Cancel => self.error_timer.update_value(|slot| {
                slot.take();
            }),
            TimerAction::Arm(deadline) => {
                let store = self.store;
                let timeout = Timeout::new(DELETE_ERROR_TTL_MS as u32, move || {
                    store_apply(&store, |state| page::on_timer(state, deadline));
                });
                // assigning drops (and so cancels) the previous handle
                self.error_timer.update_value(|slot| *slot = Some(timeout));
            }
        }
    }
}

/// Get the page controller from context
pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}
