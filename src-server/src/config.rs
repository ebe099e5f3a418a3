//! Server Configuration
//!
//! Command-line flags, each overridable from the environment.

use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "lead-desk-server", version, about = "In-memory leads API for local development")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "LEAD_DESK_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Preload a handful of demo leads
    #[arg(long, env = "LEAD_DESK_SEED", default_value_t = false)]
    pub seed: bool,
}
