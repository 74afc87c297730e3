//! Global dashboard settings.

use serde::{Deserialize, Serialize};

/// The single settings record, persisted under its own storage key.
///
/// Unknown fields from older installs are dropped on read; missing fields
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Bearer token for the tracking provider.
    ///
    /// Accepts the `ship24ApiKey` name older installs persisted under.
    #[serde(alias = "ship24ApiKey")]
    pub provider_api_key: Option<String>,
    /// Auto-refresh interval in minutes
    pub shipment_refresh_interval: u64,
    /// Whether shipment status changes raise a notification
    pub enable_shipment_notifications: bool,
    /// Default shipping rate suggested in the shipment form
    pub default_shipping_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider_api_key: None,
            shipment_refresh_interval: 30,
            enable_shipment_notifications: true,
            default_shipping_rate: 25.0,
        }
    }
}
