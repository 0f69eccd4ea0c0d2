//! HTTP server command
//!
//! Runs the LightBnB API: property search, listings, reservations, users.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lightbnb_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use lightbnb_server::http::{run_server, AppState, ServerConfig};
use lightbnb_server::MemoryPropertyStore;

use crate::config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "LIGHTBNB_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "LIGHTBNB_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// JSON file of existing listings to seed the in-memory property store
    #[arg(long, value_name = "FILE")]
    pub seed_properties: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = config::database_url(args.database_url)?;
    let bind_addr = SocketAddr::new(args.bind, args.port);

    tracing::info!("Starting lightbnb server on {}", bind_addr);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let properties = match args.seed_properties {
        Some(path) => MemoryPropertyStore::seed_from_json(&path)
            .await
            .context("Failed to seed property store")?,
        None => MemoryPropertyStore::new(),
    };

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(AppState::new(pool, properties), config)
        .await
        .context("Server error")?;

    Ok(())
}
