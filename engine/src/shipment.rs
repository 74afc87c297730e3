//! Shipment records and their tracking timeline.

use crate::{OrderNumber, RecordId, ShipmentStatus, TrackerId};
use serde::{Deserialize, Serialize};

/// One entry in a shipment's tracking timeline.
///
/// The ordering of events is whatever the provider returned; the engine
/// never reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    /// When the event occurred (provider timestamp, ISO 8601)
    pub timestamp: String,
    /// Where the event occurred
    pub location: String,
    /// Provider status code for the event
    pub status: String,
    /// Human-readable description
    pub message: String,
}

/// A tracked shipment for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Unique identifier, assigned at creation and never changed
    pub id: RecordId,
    /// Weak reference to the originating order
    pub order_number: OrderNumber,
    /// Carrier tracking number, immutable once set
    pub tracking_number: String,
    /// Carrier name, immutable once set
    pub carrier: String,
    /// Provider handle, assigned only after successful registration
    pub tracker_id: Option<TrackerId>,
    /// Current milestone
    pub status: ShipmentStatus,
    /// When the shipment record was created (ISO 8601)
    pub created_date: String,
    /// Most recent successful refresh (ISO 8601)
    pub last_update: String,
    /// Provider's delivery estimate, if any
    pub estimated_delivery: Option<String>,
    /// Shipping cost, also recorded as a Shipping expense at creation
    pub shipping_cost: f64,
    /// Tracking timeline, replaced wholesale on each refresh
    pub events: Vec<TrackingEvent>,
}

impl Shipment {
    /// Create a new shipment in `Pending` state with an empty timeline.
    pub fn new(
        id: impl Into<RecordId>,
        order_number: OrderNumber,
        tracking_number: impl Into<String>,
        carrier: impl Into<String>,
        shipping_cost: f64,
        now: impl Into<String>,
    ) -> Self {
        let now = now.into();
        Self {
            id: id.into(),
            order_number,
            tracking_number: tracking_number.into(),
            carrier: carrier.into(),
            tracker_id: None,
            status: ShipmentStatus::Pending,
            created_date: now.clone(),
            last_update: now,
            estimated_delivery: None,
            shipping_cost,
            events: Vec::new(),
        }
    }

    /// Record a successful provider registration.
    pub fn mark_registered(&mut self, tracker_id: impl Into<TrackerId>) {
        self.tracker_id = Some(tracker_id.into());
        self.status = ShipmentStatus::InfoReceived;
    }

    /// Apply a provider status update.
    ///
    /// Status, delivery estimate, and the event timeline are overwritten
    /// wholesale; events the provider stopped reporting disappear too.
    /// The reported milestone is trusted verbatim, with no monotonicity
    /// check. Returns true when the status actually changed.
    pub fn apply_update(
        &mut self,
        status: ShipmentStatus,
        estimated_delivery: Option<String>,
        events: Vec<TrackingEvent>,
        now: impl Into<String>,
    ) -> bool {
        let changed = self.status != status;
        self.status = status;
        if estimated_delivery.is_some() {
            self.estimated_delivery = estimated_delivery;
        }
        self.events = events;
        self.last_update = now.into();
        changed
    }

    /// Whether the auto-refresh loop should still poll this shipment.
    pub fn is_eligible_for_refresh(&self) -> bool {
        !self.status.is_terminal() && self.tracker_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_shipment() -> Shipment {
        Shipment::new("SHIP001", 101, "1Z999", "UPS", 25.0, "2025-01-10T08:00:00Z")
    }

    #[test]
    fn new_shipment_is_pending_and_untracked() {
        let shipment = test_shipment();
        assert_eq!(shipment.status, ShipmentStatus::Pending);
        assert!(shipment.tracker_id.is_none());
        assert!(shipment.events.is_empty());
        assert!(shipment.estimated_delivery.is_none());
        assert_eq!(shipment.created_date, shipment.last_update);
    }

    #[test]
    fn registration_sets_tracker_and_status() {
        let mut shipment = test_shipment();
        shipment.mark_registered("TR1");

        assert_eq!(shipment.tracker_id.as_deref(), Some("TR1"));
        assert_eq!(shipment.status, ShipmentStatus::InfoReceived);
    }

    #[test]
    fn apply_update_detects_change() {
        let mut shipment = test_shipment();
        shipment.mark_registered("TR1");

        let changed = shipment.apply_update(
            ShipmentStatus::InTransit,
            Some("2025-01-15".into()),
            vec![TrackingEvent {
                timestamp: "2025-01-11T09:00:00Z".into(),
                location: "Sydney".into(),
                status: "departed".into(),
                message: "Departed facility".into(),
            }],
            "2025-01-11T10:00:00Z",
        );

        assert!(changed);
        assert_eq!(shipment.status, ShipmentStatus::InTransit);
        assert_eq!(shipment.estimated_delivery.as_deref(), Some("2025-01-15"));
        assert_eq!(shipment.events.len(), 1);
        assert_eq!(shipment.last_update, "2025-01-11T10:00:00Z");
    }

    #[test]
    fn apply_update_same_status_reports_unchanged() {
        let mut shipment = test_shipment();
        shipment.mark_registered("TR1");

        let changed = shipment.apply_update(
            ShipmentStatus::InfoReceived,
            None,
            Vec::new(),
            "2025-01-11T10:00:00Z",
        );

        assert!(!changed);
    }

    #[test]
    fn events_are_replaced_not_merged() {
        let mut shipment = test_shipment();
        shipment.mark_registered("TR1");

        let event = |loc: &str| TrackingEvent {
            timestamp: "2025-01-11T09:00:00Z".into(),
            location: loc.into(),
            status: "update".into(),
            message: "Status update".into(),
        };

        shipment.apply_update(
            ShipmentStatus::InTransit,
            None,
            vec![event("A"), event("B")],
            "2025-01-11T10:00:00Z",
        );
        shipment.apply_update(
            ShipmentStatus::InTransit,
            None,
            vec![event("C")],
            "2025-01-12T10:00:00Z",
        );

        assert_eq!(shipment.events.len(), 1);
        assert_eq!(shipment.events[0].location, "C");
    }

    #[test]
    fn refresh_eligibility() {
        let mut shipment = test_shipment();
        // Pending with no tracker: never polled
        assert!(!shipment.is_eligible_for_refresh());

        shipment.mark_registered("TR1");
        assert!(shipment.is_eligible_for_refresh());

        shipment.apply_update(
            ShipmentStatus::Delivered,
            None,
            Vec::new(),
            "2025-01-12T10:00:00Z",
        );
        assert!(!shipment.is_eligible_for_refresh());
    }

    #[test]
    fn serde_shape_is_camel_case() {
        let shipment = test_shipment();
        let json = serde_json::to_value(&shipment).unwrap();

        assert_eq!(json["orderNumber"], 101);
        assert_eq!(json["trackingNumber"], "1Z999");
        assert_eq!(json["trackerId"], serde_json::Value::Null);
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["shippingCost"], 25.0);

        let parsed: Shipment = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, shipment);
    }
}
