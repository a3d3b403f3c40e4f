//! Pursuit server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `pursuit-config.yaml` (or `PURSUIT_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the configured case store
//! 4. Build the configured content generator
//! 5. Serve HTTP until `Ctrl-C`

use std::sync::Arc;

use pursuit_core::config::{LogFormat, LoggingConfig};
use pursuit_core::{CaseEngine, PursuitConfig};
use pursuit_db::CaseStoreBackend;
use pursuit_server::error::StartupError;
use pursuit_server::server::start_server;
use pursuit_server::state::{AppState, ContentBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store or generator setup fails, or
/// the server cannot bind.
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Config comes first so it can set the log level and format.
    let config = PursuitConfig::load()?;
    init_tracing(&config.logging);

    info!(
        hop_count = config.game.hop_count,
        destination_count = config.game.destination_count,
        clue_count = config.game.clue_count,
        "Configuration loaded"
    );

    let store = CaseStoreBackend::from_config(&config.store).await?;
    let generator = ContentBackend::from_config(&config.generator)?;
    info!(
        store = store.name(),
        generator = generator.name(),
        "Backends ready"
    );

    let engine = CaseEngine::new(store, generator, config.game);
    let state = Arc::new(AppState::new(engine));

    start_server(&config.server, state).await?;
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the config level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
