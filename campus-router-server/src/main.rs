use std::path::PathBuf;
use std::sync::Arc;

use campus_router_core::create_campus_model;
use campus_router_server::{AppState, ServerConfig, build_router};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

/// Walking routes over campus paths
#[derive(Parser, Debug)]
#[command(name = "campus-router-server")]
#[command(about = "Serves campus place search and walking routes", long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "campus-router.toml")]
    config: PathBuf,

    /// Listen address, overrides the config file
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,campus_router_server=debug".into()),
        )
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::load(&args.config)?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    info!("Loaded config from {}", args.config.display());

    let data = config.data.clone();
    let model = tokio::task::spawn_blocking(move || create_campus_model(&data)).await??;

    let state = Arc::new(AppState::new(
        model,
        config.data.clone(),
        config.restrict_to_campus,
    ));
    let app = build_router(state, &config);

    let listener = TcpListener::bind(&config.bind).await?;
    info!("campus-router-server listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
