//! Configuration management for the synchronizer.

use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables.
///
/// Everything here is an override; the persisted settings record is the
/// source of truth for values the dashboard can edit.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted collections
    pub data_dir: PathBuf,
    /// Provider API key override (wins over the stored settings)
    pub provider_api_key: Option<String>,
    /// Provider base URL override (used against a local mock)
    pub provider_base_url: Option<String>,
    /// Refresh interval override, in minutes
    pub refresh_interval_minutes: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var("FLORALAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let provider_api_key = env::var("SHIP24_API_KEY").ok();
        let provider_base_url = env::var("SHIP24_BASE_URL").ok();

        let refresh_interval_minutes = match env::var("SHIPMENT_REFRESH_INTERVAL") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidRefreshInterval(raw))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            data_dir,
            provider_api_key,
            provider_base_url,
            refresh_interval_minutes,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SHIPMENT_REFRESH_INTERVAL value: {0}")]
    InvalidRefreshInterval(String),

    #[error("No provider API key configured (set SHIP24_API_KEY or the settings record)")]
    MissingApiKey,
}
