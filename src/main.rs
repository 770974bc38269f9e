//! Rolodex binary entry point: CLI parsing, config, logging, serving.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use rolodex::api::{server, ApiState};
use rolodex::config::RolodexConfig;
use rolodex::contacts::service::SqlContactService;
use rolodex::contacts::store::ContactStore;
use rolodex::{db, logging};

/// Contact management HTTP service.
#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Start,
    /// Apply schema migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = RolodexConfig::load().context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Start) {
        Command::Start => start(config).await,
        Command::Migrate => migrate(config).await,
    }
}

/// Serve the API until shutdown.
async fn start(config: RolodexConfig) -> Result<()> {
    let _guard = logging::init_production(Path::new(&config.log.logs_dir), &config.log.level)
        .context("failed to initialise logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "rolodex starting");

    let pool = db::connect(&config.database)
        .await
        .context("failed to open database")?;
    db::apply_migrations(&pool)
        .await
        .context("failed to apply migrations")?;

    let service = SqlContactService::new(ContactStore::new(pool));
    let state = Arc::new(ApiState {
        contacts: Arc::new(service),
    });

    server::serve(&config.server, state).await
}

/// Apply schema migrations and exit.
async fn migrate(config: RolodexConfig) -> Result<()> {
    logging::init_cli();

    let pool = db::connect(&config.database)
        .await
        .context("failed to open database")?;
    db::apply_migrations(&pool)
        .await
        .context("failed to apply migrations")?;

    info!(path = %config.database.path, "migrations applied");
    Ok(())
}
