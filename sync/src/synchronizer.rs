//! Shipment synchronizer - owns the shipment lifecycle and its effect on
//! the linked order.
//!
//! All mutation goes through the store's read-whole / modify / write-whole
//! cycle. Provider calls are the only suspension points; within a batch
//! refresh, shipments are handled strictly sequentially with a pacing
//! delay as courtesy to the provider.

use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::provider::{ProviderEvent, TrackingProvider};
use chrono::{SecondsFormat, Utc};
use floralab_engine::{
    collections, next_sequence_id, Expense, LocalStore, Order, OrderNumber, OrderStatus, Shipment,
    ShipmentStatus, TrackingEvent,
};
use std::sync::Arc;
use std::time::Duration;

/// Delay between provider calls in a batch refresh.
const DEFAULT_PACING: Duration = Duration::from_secs(1);

/// Input for creating a shipment from the "add shipment" form.
#[derive(Debug, Clone)]
pub struct NewShipment {
    pub order_number: OrderNumber,
    pub tracking_number: String,
    pub carrier: String,
    pub shipping_cost: f64,
}

/// What a single refresh did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Provider reported a new milestone
    Updated {
        old_status: ShipmentStatus,
        new_status: ShipmentStatus,
    },
    /// Provider responded but the milestone did not change
    Unchanged,
    /// Shipment was never registered; no provider call was made
    Skipped,
}

/// Summary of a batch refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Provider calls attempted (one per eligible shipment)
    pub attempted: usize,
    /// Shipments whose status changed
    pub updated: usize,
    /// Shipments whose refresh failed
    pub failed: usize,
}

/// Owns shipment state transitions and cross-entity propagation.
///
/// The store is injected and exclusively owned; there is no ambient
/// singleton to reach around it.
pub struct Synchronizer {
    store: LocalStore,
    provider: Arc<dyn TrackingProvider>,
    notifier: Arc<dyn Notifier>,
    pacing: Duration,
}

impl Synchronizer {
    /// Create a synchronizer with the default pacing delay.
    pub fn new(
        store: LocalStore,
        provider: Arc<dyn TrackingProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            provider,
            notifier,
            pacing: DEFAULT_PACING,
        }
    }

    /// Override the pacing delay between batch refresh calls.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Create a shipment for an order and start tracking it.
    ///
    /// The shipping cost is always recorded as a "Shipping" expense, and
    /// the shipment and order updates are always persisted - provider
    /// registration failure degrades to an untracked shipment instead of
    /// aborting fulfillment. Only a storage failure escapes.
    pub async fn create_shipment(&self, new: NewShipment) -> Result<Shipment> {
        let now = now_iso();
        let today = today_iso();

        let mut expenses: Vec<Expense> = self.store.read_collection(collections::EXPENSES);
        expenses.push(Expense::shipping(
            next_sequence_id("EXP", expenses.len()),
            new.order_number,
            new.shipping_cost,
            today,
        ));

        let mut shipments: Vec<Shipment> = self.store.read_collection(collections::SHIPMENTS);
        let mut shipment = Shipment::new(
            next_sequence_id("SHIP", shipments.len()),
            new.order_number,
            &new.tracking_number,
            &new.carrier,
            new.shipping_cost,
            now,
        );

        match self.provider.register(&new.tracking_number).await {
            Ok(tracker_id) => {
                tracing::info!(
                    shipment = %shipment.id,
                    tracker = %tracker_id,
                    "tracking registered"
                );
                shipment.mark_registered(tracker_id);
            }
            Err(e) => {
                tracing::warn!(
                    shipment = %shipment.id,
                    error = %e,
                    "tracking registration failed, creating untracked shipment"
                );
            }
        }

        let mut orders: Vec<Order> = self.store.read_collection(collections::ORDERS);
        match orders
            .iter_mut()
            .find(|o| o.order_number == new.order_number)
        {
            Some(order) => order.mark_shipped(&new.tracking_number, &shipment.id),
            None => {
                tracing::warn!(
                    order_number = new.order_number,
                    "no order found for new shipment"
                );
            }
        }

        shipments.push(shipment.clone());

        self.store
            .write_collection(collections::EXPENSES, &expenses)?;
        self.store
            .write_collection(collections::SHIPMENTS, &shipments)?;
        self.store.write_collection(collections::ORDERS, &orders)?;

        Ok(shipment)
    }

    /// Refresh one shipment from the provider.
    ///
    /// A shipment that was never registered is skipped with a warning and
    /// zero provider calls. On success, status, delivery estimate, and
    /// the event timeline are overwritten wholesale; a status change
    /// raises a notification (settings permitting) and, when the new
    /// status is `Delivered`, marks the linked order delivered. On any
    /// failure the shipment is left unchanged.
    pub async fn refresh_shipment(&self, shipment_id: &str) -> Result<RefreshOutcome> {
        let mut shipments: Vec<Shipment> = self.store.read_collection(collections::SHIPMENTS);
        let index = shipments
            .iter()
            .position(|s| s.id == shipment_id)
            .ok_or_else(|| {
                Error::Engine(floralab_engine::Error::RecordNotFound {
                    collection: collections::SHIPMENTS.to_string(),
                    id: shipment_id.to_string(),
                })
            })?;

        let Some(tracker_id) = shipments[index].tracker_id.clone() else {
            tracing::warn!(shipment = shipment_id, "cannot refresh: no tracker id");
            return Ok(RefreshOutcome::Skipped);
        };

        let update = self.provider.tracker_status(&tracker_id).await?;

        // Map the milestone before touching the shipment so an unknown
        // vocabulary value leaves local state untouched.
        let shipment = &mut shipments[index];
        let old_status = shipment.status;
        let new_status = match update.milestone.as_deref() {
            Some(milestone) => ShipmentStatus::from_milestone(milestone)?,
            None => old_status,
        };

        let events = update.events.into_iter().map(to_tracking_event).collect();
        let changed =
            shipment.apply_update(new_status, update.estimated_delivery, events, now_iso());
        let order_number = shipment.order_number;
        let shipment_record_id = shipment.id.clone();

        self.store
            .write_collection(collections::SHIPMENTS, &shipments)?;

        if !changed {
            return Ok(RefreshOutcome::Unchanged);
        }

        if self.store.read_settings().enable_shipment_notifications {
            self.notifier.send(
                "Shipment Update",
                &format!("Order #{}: {}", order_number, new_status.label()),
            );
        }

        if new_status == ShipmentStatus::Delivered {
            let mut orders: Vec<Order> = self.store.read_collection(collections::ORDERS);
            if let Some(order) = orders
                .iter_mut()
                .find(|o| o.shipment_id.as_deref() == Some(shipment_record_id.as_str()))
            {
                order.status = OrderStatus::Delivered;
                self.store.write_collection(collections::ORDERS, &orders)?;
            }
        }

        Ok(RefreshOutcome::Updated {
            old_status,
            new_status,
        })
    }

    /// Refresh every non-terminal, registered shipment.
    ///
    /// Shipments are refreshed strictly sequentially with the pacing
    /// delay between calls. A failed shipment never halts the batch; its
    /// error is logged and counted.
    pub async fn refresh_all(&self) -> RefreshReport {
        let shipments: Vec<Shipment> = self.store.read_collection(collections::SHIPMENTS);
        let eligible: Vec<String> = shipments
            .iter()
            .filter(|s| s.is_eligible_for_refresh())
            .map(|s| s.id.clone())
            .collect();

        let mut report = RefreshReport::default();

        for (i, shipment_id) in eligible.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.pacing).await;
            }

            report.attempted += 1;
            match self.refresh_shipment(shipment_id).await {
                Ok(RefreshOutcome::Updated {
                    old_status,
                    new_status,
                }) => {
                    tracing::info!(
                        shipment = %shipment_id,
                        from = %old_status,
                        to = %new_status,
                        "shipment status changed"
                    );
                    report.updated += 1;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(shipment = %shipment_id, error = %e, "refresh failed");
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Count of shipments the auto-refresh loop would poll.
    pub fn eligible_count(&self) -> usize {
        let shipments: Vec<Shipment> = self.store.read_collection(collections::SHIPMENTS);
        shipments
            .iter()
            .filter(|s| s.is_eligible_for_refresh())
            .count()
    }
}

/// Map a provider event onto the stored timeline shape, with the
/// long-standing fallbacks for fields the provider omits.
fn to_tracking_event(event: ProviderEvent) -> TrackingEvent {
    TrackingEvent {
        timestamp: event.datetime.unwrap_or_default(),
        location: event.location.unwrap_or_else(|| "Unknown".to_string()),
        status: event.status.unwrap_or_else(|| "Update".to_string()),
        message: event
            .status_description
            .unwrap_or_else(|| "Status update".to_string()),
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
