//! Attendance Rule Engine HTTP service.

use std::net::SocketAddr;
use std::path::PathBuf;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use attendance_engine::engine::AttendanceEngine;
use clap::Parser;

/// Serves the attendance rule engine over HTTP.
#[derive(Parser)]
#[command(name = "attendance-engine", version)]
struct Cli {
    /// Path to the YAML rule configuration. Built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let loader = match &cli.config {
        Some(path) => {
            tracing::info!("Loading rule configuration from {:?}", path);
            ConfigLoader::load(path)?
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            ConfigLoader::default()
        }
    };

    let engine = AttendanceEngine::new(loader.into_config())?;
    let router = create_router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!("Attendance engine listening on {}", cli.bind);
    axum::serve(listener, router).await?;

    Ok(())
}
