//! Support dashboard web server
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use supportdesk_core::{
    Config, LogFormat,
    context_error::{Result, ResultExt},
    init_logging,
};
use supportdesk_web::{AppState, build_app, export::export_site};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Command line interface for the support dashboard
#[derive(Parser)]
#[command(
    name = "supportdesk-web",
    version = env!("CARGO_PKG_VERSION"),
    about = "Server-rendered support dashboard",
    long_about = "Serves the support dashboard and issue list, rendering every page from a single fetch against the issue-tracking backend API."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level or filter directive, overrides the configuration
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve,

    /// Render every page once into a directory
    Export {
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let (mut config, load_error) = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => (config, None),
        // An explicit file must load
        Err(e) if cli.config.is_some() => return Err(e.into()),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.logging.format = LogFormat::Json;
    }
    init_logging(&config.logging)?;

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to read .env file");
        }
    }
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Export { out_dir } => {
            let state = AppState::new(config);
            let written = export_site(&state, &out_dir)
                .await
                .with_context(|| format!("Failed to export site to {}", out_dir.display()))?;
            info!(pages = written.len(), out_dir = %out_dir.display(), "Export complete");
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let addr = config.socket_addr()?;
    info!(
        %addr,
        backend = %config.backend.base_url,
        "Starting support dashboard"
    );

    let app = build_app(config);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
