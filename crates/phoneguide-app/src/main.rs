//! PhoneGuide application binary - composition root.
//!
//! Ties together the PhoneGuide crates into a single executable:
//! 1. Load configuration from TOML
//! 2. Load and validate the phone catalog (fatal on any bad record)
//! 3. Build the Groq completion client from the environment
//! 4. Wire the turn engine and start the axum REST API server

use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use phoneguide_api::routes;
use phoneguide_api::state::AppState;
use phoneguide_catalog::CatalogStore;
use phoneguide_chat::TurnEngine;
use phoneguide_core::config::GuideConfig;
use phoneguide_llm::{CompletionClient, GroqClient};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();

    // Config first so the log level can come from it.
    let config_file = args.resolve_config_path();
    let mut config = GuideConfig::load_or_default(&config_file);
    config.server.port = args.resolve_port(config.server.port);
    if let Some(catalog_path) = args.resolve_catalog_path() {
        config.catalog.path = catalog_path;
    }
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting PhoneGuide v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Catalog: any malformed record aborts startup.
    let catalog = match CatalogStore::load(Path::new(&config.catalog.path)) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(path = %config.catalog.path, error = %e, "Catalog load failed");
            return Err(e.into());
        }
    };

    // Completion client: a missing API key is a startup error, not a
    // degraded mode.
    let completion: Arc<dyn CompletionClient> = match GroqClient::from_env(&config.llm) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Completion client setup failed");
            return Err(e.into());
        }
    };
    tracing::info!(model = %config.llm.model, "Completion client ready");

    // Turn engine + API server.
    let engine = TurnEngine::new(catalog, completion);
    let state = AppState::new(config, engine);

    routes::start_server(state).await?;

    Ok(())
}
