//! Paisa server binary
//!
//! Usage:
//!   paisa-server --db paisa.db --port 3000

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use paisa_core::{Categorizer, Database};
use paisa_server::{serve, ServerConfig};

#[derive(Parser)]
#[command(name = "paisa-server", about = "REST API server for the paisa expense tracker")]
struct Cli {
    /// Database file path
    #[arg(long, default_value = "paisa.db")]
    db: PathBuf,

    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Allowed CORS origin (repeatable)
    #[arg(long = "allow-origin")]
    allowed_origins: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let db_path = cli
        .db
        .to_str()
        .context("Database path must be valid UTF-8")?;
    let db = Database::new(db_path).context("Failed to open database")?;

    // PAISA_CLASSIFIER_URL overrides the default remote endpoint
    let categorizer = Categorizer::from_env();

    let config = ServerConfig {
        allowed_origins: cli.allowed_origins,
    };

    serve(db, categorizer, &cli.host, cli.port, config).await
}
