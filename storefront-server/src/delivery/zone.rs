//! Zone pricing strategy
//!
//! Flat price per customer-selected zone. Selection is always explicit;
//! there is no geometry and no nearest-zone fallback.

use shared::models::DeliveryZone;
use shared::{AppError, AppResult, ErrorCode};

use super::resolver::DeliveryQuote;
use crate::checkout::money::round2;

/// Quote a delivery fee for an explicitly selected zone.
///
/// A stale id (zone deleted or deactivated since the client fetched the
/// list) is an error; the caller re-fetches and re-prompts rather than
/// defaulting to a price.
pub fn price_by_zone(
    zones: &[DeliveryZone],
    zone_id: i64,
    subtotal: f64,
) -> AppResult<DeliveryQuote> {
    let zone = zones
        .iter()
        .find(|z| z.id == zone_id)
        .ok_or_else(|| {
            AppError::precondition(ErrorCode::DeliveryZoneNotFound).with_detail("zone_id", zone_id)
        })?;
    if !zone.is_active {
        return Err(
            AppError::precondition(ErrorCode::DeliveryZoneInactive).with_detail("zone_id", zone_id)
        );
    }

    let free = zone
        .free_delivery_threshold
        .is_some_and(|threshold| subtotal >= threshold);
    let fee = if free { 0.0 } else { round2(zone.fixed_price) };

    let message = if free {
        format!("Free delivery to {}", zone.name)
    } else {
        format!("Delivery to {}: ${fee:.2}", zone.name)
    };

    Ok(DeliveryQuote::Zone {
        fee,
        zone_name: zone.name.clone(),
        estimated_time_minutes: zone.estimated_time_minutes,
        message,
    })
}
