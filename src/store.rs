//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the shared
//! `PageState`; reads go through field accessors, transitions through
//! `store_apply`.

use leptos::prelude::*;
use reactive_stores::Store;

pub use lead_core::page::{PageState, PageStateStoreFields};

/// Type alias for the store
pub type AppStore = Store<PageState>;

/// Run a `lead_core::page` transition against the store
pub fn store_apply<R>(store: &AppStore, transition: impl FnOnce(&mut PageState) -> R) -> R {
    transition(&mut store.write())
}
