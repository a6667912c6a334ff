//! Order Model
//!
//! Orders are created and mutated by the remote commerce API; this client
//! only displays them and requests cancellations or status transitions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status, shared by orders and individual lines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Accepted, being assembled
    #[default]
    Processing,
    /// Assembled, waiting for the customer
    ReadyForPickup,
    /// Handed over to the customer
    Issued,
    Cancelled,
}

impl OrderStatus {
    /// Every status an admin may assign, in selector order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::ReadyForPickup,
        OrderStatus::Issued,
        OrderStatus::Cancelled,
    ];
}

/// One line of an order
///
/// Carries its own status independent of the order-level status, so a
/// single line can be cancelled or ready while the rest is in progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub article: String,
    pub source: String,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order entity as returned by the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub products: Vec<OrderLine>,
    #[serde(rename = "totalAmount", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Customer reference, present on admin listings
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Creation timestamp, present on the detail endpoint
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Sum of line totals. The remote `total_amount` is authoritative;
    /// this recomputes it for display of admin listings.
    pub fn computed_total(&self) -> Decimal {
        self.products.iter().map(OrderLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_screaming_snake_case() {
        let json = serde_json::to_string(&OrderStatus::ReadyForPickup).unwrap();
        assert_eq!(json, r#""READY_FOR_PICKUP""#);
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::ReadyForPickup);
    }

    #[test]
    fn order_deserializes_wire_shape() {
        let json = r#"{
            "_id": "o1",
            "products": [
                {"article": "A1", "source": "S1", "name": "Lamp", "quantity": 2, "price": 500.0, "status": "PROCESSING"}
            ],
            "totalAmount": 1000.0,
            "status": "PROCESSING",
            "userId": "u1"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "o1");
        assert_eq!(order.products.len(), 1);
        assert_eq!(order.total_amount, Decimal::new(1000, 0));
        assert_eq!(order.computed_total(), Decimal::new(1000, 0));
        assert_eq!(order.user_id.as_deref(), Some("u1"));
        assert_eq!(order.created_at, None);
    }

    #[test]
    fn created_at_parses_rfc3339() {
        let json = r#"{
            "_id": "o2",
            "products": [],
            "totalAmount": 0.0,
            "status": "ISSUED",
            "createdAt": "2024-11-05T12:30:00.000Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        let created = order.created_at.unwrap();
        assert_eq!(created.timestamp(), 1_730_809_800);
    }

    #[test]
    fn line_status_defaults_to_processing() {
        let json = r#"{"article": "A1", "source": "S1", "name": "Lamp", "quantity": 1, "price": 10.0}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.status, OrderStatus::Processing);
    }
}
