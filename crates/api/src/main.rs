use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use flightmcp_core::service::FlightService;
use flightmcp_providers::{build_http_client, AviationStackClient, FlightApiClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flightmcp_api::config::ServerConfig;
use flightmcp_api::router::build_app_router;
use flightmcp_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flightmcp_api=debug,flightmcp_core=debug,flightmcp_providers=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Providers ---
    let http = build_http_client().context("Failed to build HTTP client")?;
    let catalog = AviationStackClient::new(
        http.clone(),
        &config.aviationstack.base_url,
        config.aviationstack.api_key.clone(),
    )
    .context("Invalid AVIATIONSTACK_BASE_URL")?;
    let schedule = FlightApiClient::new(
        http,
        &config.flightapi.base_url,
        config.flightapi.api_key.clone(),
    )
    .context("Invalid FLIGHTAPI_BASE_URL")?;
    tracing::info!(
        aviationstack = %config.aviationstack.base_url,
        flightapi = %config.flightapi.base_url,
        "Provider clients ready",
    );

    // --- App state ---
    let state = AppState {
        service: Arc::new(FlightService::new(Arc::new(catalog), Arc::new(schedule))),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let host = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address {:?}", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
