//! Hotel room inventory service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ middleware ──▶ handlers ──▶ RoomStore ──▶ reservation
//!                     (request id,      │          (RwLock)       engine
//!                      trace, metrics,  │
//!                      limits)          └──▶ UploadStore ──▶ uploads/ dir
//!     ◀────────────── JSON response
//! ```
//!
//! Routes:
//! - `GET /rooms`, `POST /rooms`
//! - `GET|PUT|DELETE /rooms/{id}`
//! - `POST /reserve/{id}`
//! - `POST /uploads-room`
//! - `GET /health`

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use room_inventory::config::{load_config, ServiceConfig};
use room_inventory::observability::{logging, metrics};
use room_inventory::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "room-inventory")]
#[command(about = "In-memory hotel room inventory over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_tracing(&config.observability);
    tracing::info!("room-inventory v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        upload_dir = %config.uploads.directory,
        seed = config.inventory.seed,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
