//! Lead Page State
//!
//! Everything the lead page shows, plus the transitions each user action and
//! API response applies to it. The UI owns one `PageState`, runs the network
//! calls, and hands results to the `on_*` functions here.
//!
//! A modal "session" starts at every open and ends at every close. A create
//! response only touches the modal, draft and banner when it belongs to the
//! current session.

use crate::banner::{ErrorBanner, DELETE_ERROR_TTL_MS};
use crate::leads;
use crate::models::{Lead, LeadDraft, NewLead};
use crate::validation::{validate, LeadField, ValidationErrors};

/// Lead page state
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "store", derive(reactive_stores::Store))]
pub struct PageState {
    /// Leads from the last successful fetch (None until one succeeds)
    pub leads: Option<Vec<Lead>>,
    /// Initial fetch in flight
    pub loading: bool,
    /// Page-wide error message
    pub banner: ErrorBanner,
    /// Add-lead modal visibility
    pub modal_open: bool,
    /// Add-lead form input
    pub draft: LeadDraft,
    /// Per-field validation messages for the draft
    pub field_errors: ValidationErrors,
    /// Create request in flight for the current session
    pub submitting: bool,
    /// Bumped on every modal open and close
    pub session: u64,
}

/// What the caller must do with the delete-error timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Keep,
    /// Drop any pending timer
    Cancel,
    /// Replace any pending timer with one firing at this deadline
    Arm(u64),
}

/// Which kind of lead table body the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Rows,
    /// No fetch succeeded yet, or the list is empty
    Empty,
}

impl PageState {
    pub fn table_body(&self) -> TableBody {
        if self.loading {
            TableBody::Loading
        } else if self.leads.as_ref().is_some_and(|l| !l.is_empty()) {
            TableBody::Rows
        } else {
            TableBody::Empty
        }
    }
}

/// A validated create request tagged with the modal session it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub lead: NewLead,
    pub session: u64,
}

pub fn on_fetch_start(state: &mut PageState) {
    state.loading = true;
}

pub fn on_fetch_ok(state: &mut PageState, loaded: Vec<Lead>) {
    state.leads = Some(loaded);
    state.loading = false;
}

/// The list stays as it was (unset if no fetch ever succeeded)
pub fn on_fetch_err(state: &mut PageState, message: String) {
    state.banner.show(message);
    state.loading = false;
}

pub fn open_modal(state: &mut PageState) -> TimerAction {
    start_session(state);
    state.modal_open = true;
    TimerAction::Cancel
}

pub fn close_modal(state: &mut PageState) -> TimerAction {
    start_session(state);
    state.modal_open = false;
    TimerAction::Cancel
}

fn start_session(state: &mut PageState) {
    state.session = state.session.wrapping_add(1);
    state.banner.clear();
    state.draft = LeadDraft::default();
    state.field_errors = ValidationErrors::new();
    state.submitting = false;
}

/// Store typed input; a field's error goes away once it is edited
pub fn edit_field(state: &mut PageState, field: LeadField, value: String) {
    match field {
        LeadField::Name => state.draft.name = value,
        LeadField::Email => state.draft.email = value,
        LeadField::Status => state.draft.status = value,
    }
    state.field_errors.remove(field);
}

/// Validate the draft. `None` means nothing should be sent: either a create
/// is already in flight or the draft has field errors (now in `field_errors`).
pub fn submit(state: &mut PageState) -> Option<Submission> {
    if state.submitting {
        return None;
    }
    match validate(&state.draft) {
        Ok(lead) => {
            state.field_errors = ValidationErrors::new();
            state.submitting = true;
            Some(Submission {
                lead,
                session: state.session,
            })
        }
        Err(errors) => {
            state.field_errors = errors;
            None
        }
    }
}

/// The lead exists server-side, so it is appended even when its session has
/// ended; only a current session closes the modal and resets the form.
pub fn on_create_ok(state: &mut PageState, session: u64, lead: Lead) -> TimerAction {
    leads::append_created(&mut state.leads, lead);
    if session != state.session {
        return TimerAction::Keep;
    }
    state.modal_open = false;
    state.draft = LeadDraft::default();
    state.field_errors = ValidationErrors::new();
    state.submitting = false;
    state.banner.clear();
    TimerAction::Cancel
}

/// The modal stays open and shows the message; a stale response is dropped
pub fn on_create_err(state: &mut PageState, session: u64, message: String) -> TimerAction {
    if session != state.session {
        return TimerAction::Keep;
    }
    state.submitting = false;
    state.banner.show(message);
    TimerAction::Cancel
}

pub fn on_delete_ok(state: &mut PageState, id: &str) -> TimerAction {
    leads::remove_by_id(&mut state.leads, id);
    state.banner.clear();
    TimerAction::Cancel
}

pub fn on_delete_err(state: &mut PageState, message: String, now_ms: u64) -> TimerAction {
    let deadline = state.banner.show_for(message, now_ms, DELETE_ERROR_TTL_MS);
    TimerAction::Arm(deadline)
}

/// Timer callback; clears the banner only if `deadline` is still current
pub fn on_timer(state: &mut PageState, deadline: u64) {
    if state.banner.deadline() == Some(deadline) {
        state.banner.expire(deadline);
    }
}
