//! Order and finance records.

use crate::{OrderNumber, OrderStatus, RecordId};
use serde::{Deserialize, Serialize};

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier
    pub id: RecordId,
    /// Human-facing order number
    pub order_number: OrderNumber,
    /// Customer name
    pub customer: String,
    /// Free-text item summary
    pub items: String,
    /// Order value
    pub total_value: f64,
    /// Fulfillment status
    pub status: OrderStatus,
    /// Date the order was placed (ISO 8601 date)
    pub order_date: String,
    /// Promised delivery deadline, if any
    pub deadline: Option<String>,
    /// Back-reference set once a shipment exists
    pub tracking_number: Option<String>,
    /// Back-reference set once a shipment exists
    pub shipment_id: Option<RecordId>,
}

impl Order {
    /// Link this order to its shipment and mark it shipped.
    pub fn mark_shipped(&mut self, tracking_number: impl Into<String>, shipment_id: impl Into<RecordId>) {
        self.status = OrderStatus::Shipped;
        self.tracking_number = Some(tracking_number.into());
        self.shipment_id = Some(shipment_id.into());
    }
}

/// A single expense entry in the finance ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier ("EXP001" style)
    pub id: RecordId,
    /// Expense date (ISO 8601 date)
    pub date: String,
    /// Ledger category ("Shipping" for shipment costs)
    pub category: String,
    /// Human-readable description
    pub description: String,
    /// Amount spent
    pub amount: f64,
}

impl Expense {
    /// Build the shipping expense recorded alongside a new shipment.
    pub fn shipping(
        id: impl Into<RecordId>,
        order_number: OrderNumber,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            category: "Shipping".to_string(),
            description: format!("Shipping for Order #{order_number}"),
            amount,
        }
    }
}

/// Build the next zero-padded sequence id for a collection.
///
/// Records in these collections are never deleted, so the sequence never
/// hands out the same id twice.
pub fn next_sequence_id(prefix: &str, existing: usize) -> RecordId {
    format!("{}{:03}", prefix, existing + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order() -> Order {
        Order {
            id: "ORD001".into(),
            order_number: 101,
            customer: "Greenhouse Co".into(),
            items: "50x Philodendron plantlets".into(),
            total_value: 450.0,
            status: OrderStatus::Packed,
            order_date: "2025-01-05".into(),
            deadline: Some("2025-01-20".into()),
            tracking_number: None,
            shipment_id: None,
        }
    }

    #[test]
    fn mark_shipped_links_shipment() {
        let mut order = test_order();
        order.mark_shipped("1Z999", "SHIP001");

        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.tracking_number.as_deref(), Some("1Z999"));
        assert_eq!(order.shipment_id.as_deref(), Some("SHIP001"));
    }

    #[test]
    fn shipping_expense_shape() {
        let expense = Expense::shipping("EXP004", 101, 25.0, "2025-01-10");

        assert_eq!(expense.category, "Shipping");
        assert_eq!(expense.amount, 25.0);
        assert_eq!(expense.description, "Shipping for Order #101");
    }

    #[test]
    fn sequence_ids_are_zero_padded() {
        assert_eq!(next_sequence_id("SHIP", 0), "SHIP001");
        assert_eq!(next_sequence_id("EXP", 9), "EXP010");
        assert_eq!(next_sequence_id("SHIP", 99), "SHIP100");
        assert_eq!(next_sequence_id("SHIP", 999), "SHIP1000");
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = test_order();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["orderNumber"], 101);
        assert_eq!(json["status"], "Packed");
        assert_eq!(json["totalValue"], 450.0);

        let parsed: Order = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, order);
    }
}
