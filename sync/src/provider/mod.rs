//! Tracking provider abstraction.
//!
//! The synchronizer only ever sees this trait; the concrete Ship24 client
//! lives in [`ship24`] and tests inject scripted implementations.

mod ship24;

pub use ship24::Ship24Client;

use crate::error::Result;
use async_trait::async_trait;
use floralab_engine::TrackerId;
use serde::{Deserialize, Serialize};

/// One timeline entry as the provider reports it.
///
/// Every field is optional; the provider's event payloads are sparse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderEvent {
    pub datetime: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub status_description: Option<String>,
}

/// Current tracker state as returned by the provider's status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerStatus {
    /// Coarse milestone, absent when the provider has nothing yet
    pub milestone: Option<String>,
    /// Estimated delivery date, if the provider reports one
    pub estimated_delivery: Option<String>,
    /// Full event timeline in provider order
    pub events: Vec<ProviderEvent>,
}

/// External courier-tracking provider.
#[async_trait]
pub trait TrackingProvider: Send + Sync {
    /// Register a tracking number, returning the provider's tracker handle.
    ///
    /// Called exactly once per shipment; failures are not retried.
    async fn register(&self, tracking_number: &str) -> Result<TrackerId>;

    /// Fetch the current state of a registered tracker.
    async fn tracker_status(&self, tracker_id: &str) -> Result<TrackerStatus>;
}
