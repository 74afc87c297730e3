//! FloraLab Sync - shipment tracking daemon.
//!
//! Boots the local store from disk, wires the Ship24 client into the
//! synchronizer, and runs the auto-refresh scheduler for the process
//! lifetime.

use floralab_sync::config::{Config, ConfigError};
use floralab_sync::notify::LogNotifier;
use floralab_sync::provider::Ship24Client;
use floralab_sync::scheduler::Scheduler;
use floralab_sync::synchronizer::Synchronizer;

use floralab_engine::{FileBackend, LocalStore};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "floralab_sync=debug,floralab_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!(data_dir = %config.data_dir.display(), "Starting FloraLab Sync");

    let store = LocalStore::new(FileBackend::new(&config.data_dir)?);

    // Environment overrides win over the stored settings record.
    let mut settings = store.read_settings();
    if let Some(key) = &config.provider_api_key {
        settings.provider_api_key = Some(key.clone());
    }
    if let Some(minutes) = config.refresh_interval_minutes {
        settings.shipment_refresh_interval = minutes;
    }

    let api_key = settings
        .provider_api_key
        .clone()
        .ok_or(ConfigError::MissingApiKey)?;

    let provider = match &config.provider_base_url {
        Some(base_url) => Ship24Client::with_base_url(api_key, base_url),
        None => Ship24Client::new(api_key),
    };

    let synchronizer = Synchronizer::new(store, Arc::new(provider), Arc::new(LogNotifier));

    let every = Duration::from_secs(settings.shipment_refresh_interval * 60);
    tracing::info!(
        interval_minutes = settings.shipment_refresh_interval,
        "auto-refresh scheduler started"
    );

    Scheduler::new(synchronizer, every).run().await;

    Ok(())
}
