//! Routes Layer
//!
//! HTTP handlers that bridge API clients to the repository.

mod lead_routes;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::repository::LeadRepository;

/// State shared across handlers
#[derive(Clone)]
pub struct ServerState {
    pub leads: LeadRepository,
}

impl ServerState {
    pub fn new(leads: LeadRepository) -> Self {
        Self { leads }
    }
}

/// Build the application router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/leads", get(lead_routes::list_leads).post(lead_routes::create_lead))
        .route("/leads/{id}", delete(lead_routes::delete_lead))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
