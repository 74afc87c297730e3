//! Status vocabularies for shipments and orders.
//!
//! The shipment vocabulary is the tracking provider's milestone set, kept
//! as a closed enum so an unrecognized provider value is reported instead
//! of silently stored.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a shipment, mirroring the provider milestone set.
///
/// `Pending` is the only state the provider never reports: it means the
/// shipment exists locally but was never registered (or registration is
/// still outstanding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Pending,
    InfoReceived,
    InTransit,
    OutForDelivery,
    Delivered,
    Exception,
}

impl ShipmentStatus {
    /// Map a provider milestone string onto the internal vocabulary.
    ///
    /// Unknown values fail loudly rather than being stored verbatim.
    pub fn from_milestone(milestone: &str) -> Result<Self> {
        match milestone {
            "Pending" => Ok(Self::Pending),
            "InfoReceived" => Ok(Self::InfoReceived),
            "InTransit" => Ok(Self::InTransit),
            "OutForDelivery" => Ok(Self::OutForDelivery),
            "Delivered" => Ok(Self::Delivered),
            "Exception" => Ok(Self::Exception),
            other => Err(Error::UnknownMilestone(other.to_string())),
        }
    }

    /// Terminal states are never polled again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Exception)
    }

    /// Human-readable form used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InfoReceived => "Info Received",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Exception => "Exception",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fulfillment status of an order.
///
/// Serialized as the spaced strings the dashboard has always persisted
/// ("Quote Sent", "In Production", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Quote Sent")]
    QuoteSent,
    #[serde(rename = "Order Received")]
    OrderReceived,
    #[serde(rename = "In Production")]
    InProduction,
    #[serde(rename = "Quality Check")]
    QualityCheck,
    Packed,
    Shipped,
    Delivered,
}
