//! Delivery Fee Resolver
//!
//! Pure dispatch over the store's configured calculation method. No
//! strategy-specific logic leaks past this point; switching methods never
//! touches caller code.

use serde::{Deserialize, Serialize};
use shared::models::{Coordinates, DeliveryCalculationMethod, DeliveryZone, Store};
use shared::{AppError, AppResult, ErrorCode};

use super::{distance, manual, zone};

/// Resolved delivery fee, one variant per strategy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum DeliveryQuote {
    Distance {
        fee: f64,
        distance_km: f64,
        within_range: bool,
        message: String,
    },
    Zone {
        fee: f64,
        zone_name: String,
        estimated_time_minutes: Option<i64>,
        message: String,
    },
    /// No numeric fee at checkout time; the total stays provisional
    Manual { message: String },
}

impl DeliveryQuote {
    /// Numeric fee to add to the order total. Manual quotes have none and
    /// out-of-range distance quotes must not be charged.
    pub fn fee(&self) -> Option<f64> {
        match self {
            DeliveryQuote::Distance {
                fee, within_range, ..
            } => within_range.then_some(*fee),
            DeliveryQuote::Zone { fee, .. } => Some(*fee),
            DeliveryQuote::Manual { .. } => None,
        }
    }

    /// Whether checkout may proceed with this quote
    pub fn is_actionable(&self) -> bool {
        match self {
            DeliveryQuote::Distance { within_range, .. } => *within_range,
            DeliveryQuote::Zone { .. } => true,
            DeliveryQuote::Manual { .. } => true,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DeliveryQuote::Distance { message, .. } => message,
            DeliveryQuote::Zone { message, .. } => message,
            DeliveryQuote::Manual { message } => message,
        }
    }
}

/// Customer-side inputs to the resolver
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeliveryRequest {
    /// Destination coordinates, required by the distance method
    pub destination: Option<Coordinates>,
    /// Selected zone id, required by the zones method
    pub zone_id: Option<i64>,
    /// Order subtotal, used for free-delivery thresholds
    #[serde(default)]
    pub subtotal: f64,
}

/// Resolve the delivery fee for a store using its configured method.
///
/// `zones` is the store's active zone list; only consulted by the zones
/// method. Strategy preconditions (missing destination, missing zone
/// selection) surface as customer-correctable errors, missing store
/// configuration as misconfiguration errors.
pub fn resolve_delivery_fee(
    store: &Store,
    zones: &[DeliveryZone],
    request: &DeliveryRequest,
) -> AppResult<DeliveryQuote> {
    let method = store
        .delivery_calculation_method
        .ok_or_else(|| AppError::misconfiguration(ErrorCode::DeliveryMethodNotConfigured, store.id))?;

    match method {
        DeliveryCalculationMethod::Distance => {
            let origin = store.origin().ok_or_else(|| {
                AppError::misconfiguration(ErrorCode::OriginCoordinatesMissing, store.id)
            })?;
            let dest = request
                .destination
                .ok_or_else(|| AppError::precondition(ErrorCode::DestinationMissing))?;
            Ok(distance::price_by_distance(
                origin,
                dest,
                store.price_per_km,
                store.min_delivery_fee,
                store.max_delivery_distance_km,
            ))
        }
        DeliveryCalculationMethod::Zones => {
            if zones.is_empty() {
                return Err(AppError::misconfiguration(
                    ErrorCode::DeliveryZonesEmpty,
                    store.id,
                ));
            }
            let zone_id = request
                .zone_id
                .ok_or_else(|| AppError::precondition(ErrorCode::ZoneNotSelected))?;
            zone::price_by_zone(zones, zone_id, request.subtotal)
        }
        DeliveryCalculationMethod::Manual => {
            Ok(manual::price_manually(store.manual_delivery_message.as_deref()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_store(method: Option<DeliveryCalculationMethod>) -> Store {
        Store {
            id: 1,
            slug: "tacos".into(),
            name: "Tacos".into(),
            whatsapp_number: "5215500000000".into(),
            address: None,
            delivery_calculation_method: method,
            price_per_km: 15.0,
            min_delivery_fee: 20.0,
            max_delivery_distance_km: 7.0,
            manual_delivery_message: Some("We'll confirm the fee by WhatsApp".into()),
            origin_lat: Some(19.4326),
            origin_lng: Some(-99.1332),
            is_active: true,
            created_at: 0,
            updated_at: None,
        }
    }

    fn zone(id: i64, name: &str, price: f64) -> DeliveryZone {
        DeliveryZone {
            id,
            store_id: 1,
            name: name.into(),
            fixed_price: price,
            free_delivery_threshold: None,
            estimated_time_minutes: Some(30),
            description: None,
            sort_order: 0,
            is_active: true,
        }
    }

    #[test]
    fn unconfigured_method_is_a_misconfiguration() {
        let store = base_store(None);
        let err = resolve_delivery_fee(&store, &[], &DeliveryRequest::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DeliveryMethodNotConfigured);
    }

    #[test]
    fn distance_method_requires_origin_and_destination() {
        let mut store = base_store(Some(DeliveryCalculationMethod::Distance));
        store.origin_lng = None;
        let err = resolve_delivery_fee(&store, &[], &DeliveryRequest::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::OriginCoordinatesMissing);

        let store = base_store(Some(DeliveryCalculationMethod::Distance));
        let err = resolve_delivery_fee(&store, &[], &DeliveryRequest::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DestinationMissing);
    }

    #[test]
    fn zones_method_requires_a_selection() {
        let store = base_store(Some(DeliveryCalculationMethod::Zones));
        let zones = vec![zone(10, "Centro", 30.0)];
        let err = resolve_delivery_fee(&store, &zones, &DeliveryRequest::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ZoneNotSelected);
    }

    #[test]
    fn zones_method_with_no_zones_is_a_misconfiguration() {
        let store = base_store(Some(DeliveryCalculationMethod::Zones));
        let request = DeliveryRequest {
            zone_id: Some(10),
            ..DeliveryRequest::default()
        };
        let err = resolve_delivery_fee(&store, &[], &request).unwrap_err();
        assert_eq!(err.code, ErrorCode::DeliveryZonesEmpty);
    }

    #[test]
    fn manual_method_quotes_the_advisory_text() {
        let store = base_store(Some(DeliveryCalculationMethod::Manual));
        let quote = resolve_delivery_fee(&store, &[], &DeliveryRequest::default()).unwrap();
        assert_eq!(quote.fee(), None);
        assert!(quote.is_actionable());
        assert_eq!(quote.message(), "We'll confirm the fee by WhatsApp");
    }

    #[test]
    fn dispatch_reaches_each_strategy() {
        let store = base_store(Some(DeliveryCalculationMethod::Zones));
        let zones = vec![zone(10, "Centro", 30.0)];
        let request = DeliveryRequest {
            zone_id: Some(10),
            subtotal: 100.0,
            ..DeliveryRequest::default()
        };
        let quote = resolve_delivery_fee(&store, &zones, &request).unwrap();
        assert_eq!(quote.fee(), Some(30.0));

        let store = base_store(Some(DeliveryCalculationMethod::Distance));
        let request = DeliveryRequest {
            destination: Some(Coordinates {
                lat: 19.44,
                lng: -99.14,
            }),
            ..DeliveryRequest::default()
        };
        let quote = resolve_delivery_fee(&store, &[], &request).unwrap();
        assert!(matches!(quote, DeliveryQuote::Distance { .. }));
        assert!(quote.is_actionable());
    }
}
