//! Lead Desk Core
//!
//! Framework-free pieces of the lead manager: data model, validation schema,
//! API envelope decoding and the list/banner state the page mutates.

pub mod banner;
pub mod envelope;
pub mod leads;
pub mod models;
pub mod page;
pub mod validation;

pub use banner::{ErrorBanner, DELETE_ERROR_TTL_MS};
pub use envelope::{decode_ack, decode_ack_response, decode_envelope, decode_response, ApiError, ApiResult};
pub use models::{Lead, LeadDraft, LeadStatus, NewLead};
pub use page::{PageState, Submission, TableBody, TimerAction};
pub use validation::{validate, LeadField, ValidationErrors, NAME_MAX_CHARS};
