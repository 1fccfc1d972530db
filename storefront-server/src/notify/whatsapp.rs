//! Outbound WhatsApp relay
//!
//! The WhatsApp message is the primary order channel; the database record
//! is tracking only. Sending is fire-and-forget: failures are logged, never
//! surfaced to the customer.

use async_trait::async_trait;
use shared::models::{DeliveryMethod, Order, PaymentMethod};

/// Outbound message channel
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver `text` to `destination` (an E.164-style phone number).
    /// Implementations swallow and log failures.
    async fn send(&self, destination: &str, text: &str);
}

/// Posts messages to a configured webhook that bridges to WhatsApp
pub struct WebhookMessenger {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookMessenger {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl Messenger for WebhookMessenger {
    async fn send(&self, destination: &str, text: &str) {
        let payload = serde_json::json!({
            "to": destination,
            "text": text,
        });
        match self.client.post(&self.webhook_url).json(&payload).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!(to = destination, "order message relayed");
            }
            Ok(resp) => {
                tracing::error!(
                    to = destination,
                    status = %resp.status(),
                    "order message relay rejected"
                );
            }
            Err(e) => {
                tracing::error!(to = destination, "order message relay failed: {e}");
            }
        }
    }
}

/// Drops messages, logging at debug. Used when no webhook is configured
/// and in tests.
pub struct NoopMessenger;

#[async_trait]
impl Messenger for NoopMessenger {
    async fn send(&self, destination: &str, text: &str) {
        tracing::debug!(to = destination, chars = text.len(), "message dropped (noop)");
    }
}

/// Render the order as the WhatsApp text the store owner receives
pub fn format_order_message(store_name: &str, order: &Order) -> String {
    let mut out = String::new();
    out.push_str(&format!("*New order {}*\n", order.order_number));
    out.push_str(&format!("{store_name}\n\n"));
    out.push_str(&format!("Customer: {}\n", order.customer_name));
    out.push_str(&format!("Phone: {}\n", order.customer_phone));

    match order.delivery_method {
        DeliveryMethod::Pickup => out.push_str("Method: pickup\n"),
        DeliveryMethod::Delivery => {
            out.push_str("Method: delivery\n");
            if let Some(address) = &order.delivery_address {
                out.push_str(&format!("Address: {address}\n"));
            }
            if let Some(zone) = &order.delivery_zone_name {
                out.push_str(&format!("Zone: {zone}\n"));
            }
        }
    }
    if let Some(slot) = &order.scheduled_for {
        out.push_str(&format!("Scheduled for: {slot}\n"));
    }

    out.push('\n');
    for item in &order.items {
        let mut name = item.product_name.clone();
        if let Some(variant) = &item.variant_name {
            name.push_str(&format!(" ({variant})"));
        }
        out.push_str(&format!(
            "{}x {} — ${:.2}\n",
            item.quantity, name, item.line_total
        ));
        for option in &item.option_names {
            out.push_str(&format!("   + {option}\n"));
        }
        if let Some(notes) = &item.notes {
            out.push_str(&format!("   note: {notes}\n"));
        }
    }

    out.push('\n');
    out.push_str(&format!("Subtotal: ${:.2}\n", order.subtotal));
    if order.fee_pending {
        out.push_str("Delivery: to be confirmed\n");
        out.push_str(&format!("Total: ${:.2} + delivery\n", order.total));
    } else {
        if order.delivery_method == DeliveryMethod::Delivery {
            out.push_str(&format!("Delivery: ${:.2}\n", order.delivery_fee));
        }
        out.push_str(&format!("Total: ${:.2}\n", order.total));
    }

    match order.payment_method {
        PaymentMethod::Cash => {
            out.push_str("Payment: cash\n");
            if let (Some(cash), Some(change)) = (order.cash_amount, order.change_due) {
                out.push_str(&format!("Pays with: ${cash:.2} (change ${change:.2})\n"));
            }
        }
        PaymentMethod::BankTransfer => out.push_str("Payment: bank transfer\n"),
    }

    if let Some(notes) = &order.notes {
        out.push_str(&format!("\nNotes: {notes}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderItemLine, OrderStatus};

    fn sample_order(fee_pending: bool) -> Order {
        Order {
            id: 1,
            store_id: 1,
            order_number: "VT-20260825-120000-001".into(),
            customer_name: "Ana".into(),
            customer_phone: "5215511111111".into(),
            delivery_method: DeliveryMethod::Delivery,
            delivery_address: Some("Av. Reforma 100".into()),
            delivery_zone_name: Some("Centro".into()),
            payment_method: PaymentMethod::Cash,
            cash_amount: Some(500.0),
            change_due: Some(190.0),
            items: vec![OrderItemLine {
                product_id: 1,
                product_name: "Pizza".into(),
                variant_id: Some("v-large".into()),
                variant_name: Some("Grande".into()),
                option_names: vec!["Queso extra".into()],
                unit_price: 155.0,
                quantity: 2,
                line_total: 310.0,
                notes: None,
            }],
            subtotal: 280.0,
            delivery_fee: 30.0,
            fee_pending,
            total: 310.0,
            status: OrderStatus::Pending,
            scheduled_for: None,
            notes: None,
            created_at: 0,
            updated_at: None,
        }
    }

    #[test]
    fn message_includes_lines_and_totals() {
        let text = format_order_message("Tacos Mari", &sample_order(false));
        assert!(text.contains("VT-20260825-120000-001"));
        assert!(text.contains("2x Pizza (Grande) — $310.00"));
        assert!(text.contains("+ Queso extra"));
        assert!(text.contains("Delivery: $30.00"));
        assert!(text.contains("Total: $310.00"));
        assert!(text.contains("change $190.00"));
    }

    #[test]
    fn pending_fee_renders_as_provisional() {
        let text = format_order_message("Tacos Mari", &sample_order(true));
        assert!(text.contains("Delivery: to be confirmed"));
        assert!(text.contains("Total: $310.00 + delivery"));
    }
}
