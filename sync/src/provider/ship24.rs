//! Ship24 REST client.
//!
//! Two endpoints are consumed, both bearer-token authenticated:
//! `POST /trackers` to register a tracking number and `GET /trackers/{id}`
//! to fetch the current milestone and event timeline.

use super::{ProviderEvent, TrackerStatus, TrackingProvider};
use crate::error::{Error, Result};
use async_trait::async_trait;
use floralab_engine::TrackerId;
use serde::Deserialize;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.ship24.com/public/v1";

/// Reqwest-based Ship24 API client.
pub struct Ship24Client {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Ship24Client {
    /// Create a client against the public Ship24 API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TrackingProvider for Ship24Client {
    async fn register(&self, tracking_number: &str) -> Result<TrackerId> {
        let response = self
            .client
            .post(format!("{}/trackers", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({ "trackingNumber": tracking_number }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Provider(format!(
                "API error: {}",
                response.status().as_u16()
            )));
        }

        let body: ApiResponse = response.json().await?;
        body.data
            .and_then(|d| d.tracker)
            .and_then(|t| t.tracker_id)
            .ok_or_else(|| Error::Provider("registration response missing trackerId".into()))
    }

    async fn tracker_status(&self, tracker_id: &str) -> Result<TrackerStatus> {
        let response = self
            .client
            .get(format!("{}/trackers/{}", self.base_url, tracker_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Provider(format!(
                "API error: {}",
                response.status().as_u16()
            )));
        }

        let body: ApiResponse = response.json().await?;
        let tracker = body
            .data
            .and_then(|d| d.tracker)
            .ok_or_else(|| Error::Provider("status response missing tracker".into()))?;

        let (milestone, estimated_delivery) = match tracker.shipment {
            Some(shipment) => (
                shipment.status_milestone,
                shipment.delivery.and_then(|d| d.estimated_delivery_date),
            ),
            None => (None, None),
        };

        Ok(TrackerStatus {
            milestone,
            estimated_delivery,
            events: tracker.events.unwrap_or_default(),
        })
    }
}

// Wire shapes; every field optional because the API omits liberally.

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Option<ApiData>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    tracker: Option<ApiTracker>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiTracker {
    tracker_id: Option<String>,
    shipment: Option<ApiShipment>,
    events: Option<Vec<ProviderEvent>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiShipment {
    status_milestone: Option<String>,
    delivery: Option<ApiDelivery>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiDelivery {
    estimated_delivery_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registration_response() {
        let body: ApiResponse = serde_json::from_str(
            r#"{"data": {"tracker": {"trackerId": "TR1"}}}"#,
        )
        .unwrap();

        let tracker_id = body
            .data
            .and_then(|d| d.tracker)
            .and_then(|t| t.tracker_id);
        assert_eq!(tracker_id.as_deref(), Some("TR1"));
    }

    #[test]
    fn parses_status_response_with_sparse_events() {
        let body: ApiResponse = serde_json::from_str(
            r#"{
                "data": {
                    "tracker": {
                        "trackerId": "TR1",
                        "shipment": {
                            "statusMilestone": "InTransit",
                            "delivery": {"estimatedDeliveryDate": "2025-01-15"}
                        },
                        "events": [
                            {"datetime": "2025-01-11T09:00:00Z", "statusDescription": "Departed"},
                            {}
                        ]
                    }
                }
            }"#,
        )
        .unwrap();

        let tracker = body.data.unwrap().tracker.unwrap();
        let shipment = tracker.shipment.unwrap();
        assert_eq!(shipment.status_milestone.as_deref(), Some("InTransit"));
        assert_eq!(
            shipment.delivery.unwrap().estimated_delivery_date.as_deref(),
            Some("2025-01-15")
        );

        let events = tracker.events.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].status_description.as_deref(), Some("Departed"));
        assert!(events[1].datetime.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Ship24Client::with_base_url("apik_test", "http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
