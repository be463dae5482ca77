use std::process::ExitCode;

use bus_server::clock::SystemClock;
use bus_server::config::ServerConfig;
use bus_server::index::RouteIndex;
use bus_server::schedule::{ScheduleStore, default_schedule};
use bus_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Standard logger, configured via the RUST_LOG env variable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Reject a malformed dataset before serving anything
    let store = match &config.schedule_path {
        Some(path) => {
            info!(path = %path.display(), "Loading schedule file");
            ScheduleStore::load(path)?
        }
        None => {
            info!("Using built-in schedule");
            default_schedule()?
        }
    };

    let index = RouteIndex::new(store);
    info!(
        routes = index.route_count(),
        origins = index.origins().len(),
        "Schedule loaded"
    );

    let state = AppState::new(index, SystemClock);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Bus schedule listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET /health            - Health check");
    info!("  GET /api/origins       - List origins");
    info!("  GET /api/destinations  - Destinations from an origin");
    info!("  GET /api/schedule      - Full timetable");
    info!("  GET /lookup            - Next bus between two stops");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {e}");
        // Keep serving without graceful shutdown
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received; shutting down...");
}
