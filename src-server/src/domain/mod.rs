//! Domain Layer
//!
//! Entity abstraction and domain errors. Lead data itself comes from
//! `lead-core`, shared with the frontend.

mod entity;

pub use entity::{DomainError, DomainResult, Entity};
pub use lead_core::{Lead, LeadDraft, NewLead};
