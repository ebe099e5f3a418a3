//! Lead Desk Dev Server entry point

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use lead_desk_server::repository::LeadRepository;
use lead_desk_server::{build_router, seed_demo_leads, ServerConfig, ServerState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let repo = LeadRepository::new();
    if config.seed {
        seed_demo_leads(&repo).await?;
        log::info!("Seeded {} demo leads", repo.len().await);
    }

    let listener = TcpListener::bind(config.bind).await?;
    log::info!("Leads API listening on http://{}", listener.local_addr()?);

    let app = build_router(ServerState::new(repo));
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("Shutting down");
        })
        .await?;

    Ok(())
}
