//! Pipecheck CLI - pipeline DAG validation server

use clap::Parser;
use colored::Colorize;
use tracing::info;

use pipecheck::api;
use pipecheck::config::ServerConfig;
use pipecheck::error::{FixSuggestion, PipecheckError};

#[derive(Parser)]
#[command(name = "pipecheck")]
#[command(about = "Pipecheck - HTTP validation service for pipeline DAGs")]
#[command(version)]
struct Cli {
    /// Host to bind to (overrides PIPECHECK_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides PIPECHECK_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Allowed CORS origin, repeatable (overrides PIPECHECK_CORS_ORIGINS)
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = serve(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

async fn serve(cli: Cli) -> Result<(), PipecheckError> {
    let mut config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if !cli.cors_origins.is_empty() {
        config.cors_origins = cli.cors_origins;
    }

    let app = api::router(&config)?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, origins = ?config.cors_origins, "pipecheck listening");
    axum::serve(listener, app).await?;

    Ok(())
}
