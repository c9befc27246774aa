//! dinedb-api - read-only restaurant and dish query service
//!
//! Startup order: resolve config, init tracing, open the database pool,
//! then bind the listener. No request is accepted before the pool is ready.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dinedb_api::{build_router, AppState};
use dinedb_common::config::{load_service_config, Overrides};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for dinedb-api
#[derive(Parser, Debug)]
#[command(name = "dinedb-api")]
#[command(about = "Read-only HTTP query service for restaurants and dishes")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long, env = "DINEDB_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long, env = "DINEDB_DATABASE")]
    database: Option<PathBuf>,

    /// Host to listen on
    #[arg(long, env = "DINEDB_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "DINEDB_PORT")]
    port: Option<u16>,

    /// Open the database read-only (mode=ro)
    #[arg(long, env = "DINEDB_READ_ONLY", num_args = 0..=1, default_missing_value = "true")]
    read_only: Option<bool>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "DINEDB_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            database_path: self.database.clone(),
            host: self.host.clone(),
            port: self.port,
            read_only: self.read_only,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_source) = load_service_config(&args.overrides(), args.config.as_deref())
        .context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "dinedb_api={level},dinedb_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting dinedb-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match (&config_source, &args.config) {
        (Some(path), _) => info!("Config file: {}", path.display()),
        (None, Some(requested)) => warn!(
            "Config file not found: {} (using defaults)",
            requested.display()
        ),
        (None, None) => info!("No config file found, using defaults"),
    }
    info!("Database path: {}", config.database_path.display());

    // Readiness gate: the pool must be connected before the listener exists
    let connecting =
        dinedb_common::db::connect(&config.database_path, config.read_only, config.pool);
    let pool = match connecting.await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let app = build_router(AppState::new(pool.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("dinedb-api listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
