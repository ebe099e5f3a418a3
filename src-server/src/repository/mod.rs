//! Repository Layer
//!
//! Data access abstractions and implementations.

mod lead_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use lead_repo::LeadRepository;
pub use traits::Repository;
