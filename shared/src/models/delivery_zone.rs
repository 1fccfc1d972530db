//! Delivery Zone Model

use serde::{Deserialize, Serialize};

/// Delivery zone entity (named area with a flat price)
///
/// `sort_order` values are unique per store and define customer-facing list
/// position only, not a priority/fallback chain. A zone deleted after being
/// referenced by a historical order keeps that order's snapshot fee; orders
/// never re-resolve.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeliveryZone {
    pub id: i64,
    pub store_id: i64,
    pub name: String,
    pub fixed_price: f64,
    /// Order-subtotal cutoff at or above which the fee becomes 0
    pub free_delivery_threshold: Option<f64>,
    pub estimated_time_minutes: Option<i64>,
    pub description: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
}

/// Create delivery zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryZoneCreate {
    pub name: String,
    pub fixed_price: f64,
    pub free_delivery_threshold: Option<f64>,
    pub estimated_time_minutes: Option<i64>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
}

/// Update delivery zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryZoneUpdate {
    pub name: Option<String>,
    pub fixed_price: Option<f64>,
    pub free_delivery_threshold: Option<f64>,
    pub estimated_time_minutes: Option<i64>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
