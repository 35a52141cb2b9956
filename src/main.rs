//! Agent Inventory Service (AIS v3) server.
//!
//! Serves per-agent and library inventories (folders and items) over
//! HTTP with LLSD+XML bodies.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server ──▶ routing::matcher ──▶ routing::router
//!                    (request id,      (mount prefix)       (path, options,
//!                     agent header)                          dispatch)
//!                                                               │
//!                                           ┌───────────────────┴──────────┐
//!                                           ▼                              ▼
//!                                    handlers::item               handlers::category
//!                                           │                              │
//!                                           └──────── ais::FolderResolver ─┘
//!                                                     (token → folder, hrefs,
//!                                                      request-scoped cache)
//!                                                              │
//!                                                              ▼
//!                                                     inventory::InventoryService
//!     Client Response
//!     ◀───────────── http::response (LLSD+XML, error_code, reason phrase)
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use ais_server::config::{load_config, ServiceConfig};
use ais_server::lifecycle::{signals, startup, Shutdown};
use ais_server::observability::{logging, metrics};
use ais_server::HttpServer;

#[derive(Parser)]
#[command(name = "ais-server")]
#[command(about = "Agent Inventory Service (AIS v3) server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!("ais-server v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        prefix = %config.ais.prefix,
        external_url = %config.ais.external_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let inventory = startup::build_inventory(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config, inventory);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
