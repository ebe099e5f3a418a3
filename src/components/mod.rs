//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod lead_form;
mod lead_row;
mod lead_table;
mod modal;

pub use error_banner::ErrorBanner;
pub use lead_form::LeadForm;
pub use lead_row::LeadRow;
pub use lead_table::LeadTable;
pub use modal::Modal;
