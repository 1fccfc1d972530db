//! Manual pricing strategy
//!
//! Produces no numeric fee at checkout time; the fee is agreed later over
//! WhatsApp and the order total stays provisional until then. Deliberate:
//! do not substitute a default numeric fee here.

use super::resolver::DeliveryQuote;

const DEFAULT_MESSAGE: &str = "Delivery fee to be confirmed with the store";

/// Quote the store's advisory text, or a generic fallback when none is set
pub fn price_manually(advisory: Option<&str>) -> DeliveryQuote {
    let message = match advisory {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => DEFAULT_MESSAGE.to_string(),
    };
    DeliveryQuote::Manual { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_advisory_is_quoted_verbatim() {
        let quote = price_manually(Some("Te confirmamos el costo por WhatsApp"));
        assert_eq!(quote.message(), "Te confirmamos el costo por WhatsApp");
        assert_eq!(quote.fee(), None);
        assert!(quote.is_actionable());
    }

    #[test]
    fn blank_advisory_falls_back_to_the_default() {
        assert_eq!(price_manually(None).message(), DEFAULT_MESSAGE);
        assert_eq!(price_manually(Some("   ")).message(), DEFAULT_MESSAGE);
    }
}
