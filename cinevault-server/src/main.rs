//! # Cinevault Server
//!
//! Content catalog API for a streaming-aggregation front end.
//!
//! The server exposes a single collection of movie and series records over a
//! small REST surface: filtered list, fetch by id or slug, and admin-gated
//! create/update/delete. Storage is PostgreSQL; an in-memory backend is
//! available for local development.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use cinevault_core::{ContentStore, InMemoryContentStore, PostgresContentStore};
use cinevault_server::{create_app, AppState, Config};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "cinevault-server")]
#[command(about = "Content catalog API server for movies and web series")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// Run against the in-memory store instead of Postgres
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn ContentStore> = if cli.memory {
        warn!("running with the in-memory store; records will not survive a restart");
        Arc::new(InMemoryContentStore::new())
    } else {
        let url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL must be set (or pass --memory)")?;
        let store = PostgresContentStore::connect(url)
            .await
            .context("failed to connect to the content database")?;
        info!("connected to Postgres and applied migrations");
        Arc::new(store)
    };

    let state = AppState::new(store, Arc::new(config));
    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("invalid host/port")?;
    info!("cinevault-server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to install ctrl-c handler: {e}");
        return;
    }
    info!("shutdown signal received");
}
