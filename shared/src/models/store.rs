//! Store Model

use serde::{Deserialize, Serialize};

/// Delivery fee calculation method
///
/// Store-level setting; exactly one is active per store at a time.
/// Selecting one disables the other methods' inputs in the checkout flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DeliveryCalculationMethod {
    /// Straight-line distance from the store origin, per-km rate
    Distance,
    /// Customer-selected named zone with a flat price
    Zones,
    /// Fee deferred to post-order human communication
    Manual,
}

/// A latitude/longitude pair (WGS84 decimal degrees)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Store entity (one tenant, addressed by a unique slug)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Store {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Destination number for the outbound order relay
    pub whatsapp_number: String,
    pub address: Option<String>,
    pub delivery_calculation_method: Option<DeliveryCalculationMethod>,
    /// Per-km rate (distance method), currency units
    pub price_per_km: f64,
    /// Minimum fee floor (distance method); 0 disables the floor
    pub min_delivery_fee: f64,
    /// Maximum delivery range in km (distance method)
    pub max_delivery_distance_km: f64,
    /// Advisory text shown when the method is manual
    pub manual_delivery_message: Option<String>,
    pub origin_lat: Option<f64>,
    pub origin_lng: Option<f64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl Store {
    /// Origin coordinates, present only when both components are set
    pub fn origin(&self) -> Option<Coordinates> {
        match (self.origin_lat, self.origin_lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

/// Create store payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCreate {
    pub slug: String,
    pub name: String,
    pub whatsapp_number: String,
    pub address: Option<String>,
}

/// Update store payload (partial; delivery pricing settings included)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreUpdate {
    pub name: Option<String>,
    pub whatsapp_number: Option<String>,
    pub address: Option<String>,
    pub delivery_calculation_method: Option<DeliveryCalculationMethod>,
    pub price_per_km: Option<f64>,
    pub min_delivery_fee: Option<f64>,
    pub max_delivery_distance_km: Option<f64>,
    pub manual_delivery_message: Option<String>,
    pub origin_lat: Option<f64>,
    pub origin_lng: Option<f64>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DeliveryCalculationMethod::Distance).unwrap(),
            "\"distance\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryCalculationMethod::Zones).unwrap(),
            "\"zones\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryCalculationMethod::Manual).unwrap(),
            "\"manual\""
        );
    }

    #[test]
    fn origin_requires_both_components() {
        let mut store = Store {
            id: 1,
            slug: "tacos".into(),
            name: "Tacos".into(),
            whatsapp_number: "5215500000000".into(),
            address: None,
            delivery_calculation_method: None,
            price_per_km: 0.0,
            min_delivery_fee: 0.0,
            max_delivery_distance_km: 0.0,
            manual_delivery_message: None,
            origin_lat: Some(19.43),
            origin_lng: None,
            is_active: true,
            created_at: 0,
            updated_at: None,
        };
        assert!(store.origin().is_none());
        store.origin_lng = Some(-99.13);
        let origin = store.origin().unwrap();
        assert_eq!(origin.lat, 19.43);
        assert_eq!(origin.lng, -99.13);
    }
}
