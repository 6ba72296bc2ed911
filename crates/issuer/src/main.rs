//! `token-issuer` — binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from `.env` and environment variables.
//! 2. Initialise the telemetry pipeline (JSON logs, optional OTLP export).
//! 3. Build the [`TokenIssuer`] from the validated secrets.
//! 4. Build the Axum router and serve until a shutdown signal arrives.
//!
//! Any failure before step 4 exits non-zero without binding a socket.

use anyhow::Result;
use tracing::info;

use token_issuer::config::Config;
use token_issuer::server::{self, state::AppState};
use token_issuer::telemetry;
use token_issuer::token::TokenIssuer;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(cfg.otlp_endpoint(), &cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        otlp_export = cfg.otlp_endpoint().is_some(),
        "token-issuer starting"
    );

    // -----------------------------------------------------------------------
    // 3. Token issuer
    // -----------------------------------------------------------------------
    let issuer = TokenIssuer::with_system_clock(cfg.issuer_secrets()?);

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let router = server::router::build(AppState::new(issuer));

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown::signal())
        .await?;

    info!("server stopped");
    telemetry::shutdown_telemetry();
    Ok(())
}
