use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use stockdb::config::Config;
use stockdb::inventory::{Inventory, UuidIds};
use stockdb::server::Server;
use stockdb::storage::{MemoryBackend, RocksBackend, StorageBackend};

/// Inventory-tracking backend for computer stock
#[derive(Debug, Parser)]
#[command(name = "stockdb", version)]
struct Args {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting StockDB - computer inventory backend");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let backend: Box<dyn StorageBackend> = match &config.data_path {
        Some(path) => {
            info!("Opening RocksDB store at {}", path);
            let backend = RocksBackend::open(path)
                .with_context(|| format!("Failed to open store at '{path}'"))?;
            Box::new(backend)
        }
        None => {
            info!("No data_path configured, records are kept in memory only");
            Box::new(MemoryBackend::new())
        }
    };

    let inventory = Arc::new(Inventory::new(backend, Box::new(UuidIds)));

    // Create and start TCP server
    let server = Arc::new(Server::bind(&config.server_addr, inventory).await?);
    info!("Server listening on: {}", server.local_addr());

    // Start server (blocking)
    server.run().await;

    Ok(())
}
