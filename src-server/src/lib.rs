//! Lead Desk Dev Server
//!
//! Layered architecture:
//! - domain: entity trait and domain errors
//! - repository: data access abstraction and the in-memory implementation
//! - routes: axum handlers speaking the `{error}` envelope

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod routes;

use lead_core::{LeadStatus, NewLead};

use domain::DomainResult;
use repository::LeadRepository;

pub use config::ServerConfig;
pub use routes::{build_router, ServerState};

const DEMO_LEADS: &[(&str, &str, LeadStatus)] = &[
    ("Ada Lovelace", "ada@analytical.io", LeadStatus::New),
    ("Grace Hopper", "grace@cobol.dev", LeadStatus::Engaged),
    ("Alan Turing", "alan@bletchley.uk", LeadStatus::ProposalSent),
    ("Katherine Johnson", "kj@nasa.gov", LeadStatus::ClosedWon),
];

/// Insert the demo leads
pub async fn seed_demo_leads(repo: &LeadRepository) -> DomainResult<()> {
    for (name, email, status) in DEMO_LEADS {
        repo.insert(NewLead {
            name: name.to_string(),
            email: email.to_string(),
            status: *status,
        })
        .await?;
    }
    Ok(())
}
