//! Order Model

use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Forward-only lifecycle; Cancelled is reachable from any non-terminal state
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, target) {
            (Pending, Confirmed) | (Confirmed, Preparing) | (Preparing, Ready) => true,
            (Ready, Delivered) => true,
            (Pending | Confirmed | Preparing | Ready, Cancelled) => true,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// How the customer receives the order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Pickup,
    Delivery,
}

/// How the customer pays
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
}

/// Snapshot of one cart line at checkout time
///
/// Names and prices are copied from the catalog at order creation so the
/// receipt survives later catalog edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemLine {
    pub product_id: i64,
    pub product_name: String,
    pub variant_id: Option<String>,
    pub variant_name: Option<String>,
    /// Selected option names, display order
    pub option_names: Vec<String>,
    /// Per-unit price including variant and option modifiers
    pub unit_price: f64,
    pub quantity: i64,
    /// unit_price * quantity, rounded to 2 decimals
    pub line_total: f64,
    pub notes: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub store_id: i64,
    /// Human-facing reference, e.g. `VT-20260825-143055-042`
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_method: DeliveryMethod,
    pub delivery_address: Option<String>,
    pub delivery_zone_name: Option<String>,
    pub payment_method: PaymentMethod,
    /// Cash tendered by the customer, when payment_method is cash
    pub cash_amount: Option<f64>,
    pub change_due: Option<f64>,
    #[sqlx(json)]
    pub items: Vec<OrderItemLine>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    /// True when the fee is provisional (manual method) and awaits agreement
    pub fee_pending: bool,
    pub total: f64,
    pub status: OrderStatus,
    /// Requested fulfillment slot, `YYYY-MM-DD HH:MM` store-local; None = ASAP
    pub scheduled_for: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// Status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_is_forward_only() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Delivered));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Ready));
    }

    #[test]
    fn cancel_allowed_until_terminal() {
        use OrderStatus::*;
        for s in [Pending, Confirmed, Preparing, Ready] {
            assert!(s.can_transition_to(Cancelled), "{s:?} should cancel");
        }
        assert!(!Cancelled.can_transition_to(Cancelled));
        assert!(Delivered.is_terminal());
        assert!(Cancelled.is_terminal());
    }

    #[test]
    fn status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"PREPARING\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
    }
}
