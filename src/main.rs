//! Go vanity import path server.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────────┐
//!                     │                  VANITY URL SERVER                    │
//!                     │                                                       │
//!   config file ──────┼─▶ config ──▶ routing::table ──▶ RouteTable (frozen)  │
//!                     │                                        │              │
//!   Client Request    │  ┌─────────┐    ┌──────────────┐      │              │
//!   ──────────────────┼─▶│  http   │───▶│   routing    │◀─────┘              │
//!                     │  │ server  │    │   router     │                     │
//!                     │  └────┬────┘    └──────┬───────┘                     │
//!                     │       │                ▼                              │
//!   Client Response   │       │         Dispatch: index / 404 /               │
//!   ◀─────────────────┼───────┴──────── redirect / vanity page                │
//!                     │                                                       │
//!                     │  Cross-cutting: observability, lifecycle              │
//!                     └──────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use vanity_urls::cli::Flags;
use vanity_urls::http::HttpServer;
use vanity_urls::lifecycle::{signals, startup, Shutdown};
use vanity_urls::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let flags = Flags::parse();
    if flags.show_version {
        println!("vanity-urls v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let prepared = startup::prepare(&flags.config)?;
    let mut config = prepared.config;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("vanity-urls v{} starting", env!("CARGO_PKG_VERSION"));

    if prepared.used_fallback {
        tracing::warn!(
            default = %flags.config.display(),
            path = %prepared.config_path.display(),
            "Default config file not found"
        );
    }

    let port = std::env::var("PORT").ok();
    config.server.listen = flags.listen_address(port.as_deref(), &config.server.listen);
    if let Some(timeout) = flags.timeout.filter(|t| *t > 0) {
        config.server.request_timeout_secs = timeout;
    }

    tracing::info!(
        path = %prepared.config_path.display(),
        host = %config.host,
        routes = prepared.table.len(),
        listen = %config.server.listen,
        request_timeout_secs = config.server.request_timeout_secs,
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

    let listener = TcpListener::bind(&config.server.listen).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Listening at http://{}", local_addr);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, prepared.table);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
