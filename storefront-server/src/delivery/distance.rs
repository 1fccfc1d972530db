//! Distance pricing strategy
//!
//! Great-circle distance from the store origin at a per-km rate, with an
//! optional minimum-fee floor and a hard range cutoff.

use shared::models::Coordinates;

use super::resolver::DeliveryQuote;
use crate::checkout::money::round2;

/// IUGG mean earth radius, km
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine great-circle distance in km.
///
/// Spherical-earth, not flat Euclidean; over an urban service area the
/// curvature error stays negligible while Euclidean drifts at the edges.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Quote a delivery fee by distance.
///
/// The fee is computed even when the destination is out of range so the
/// storefront can show it, but the quote is non-actionable and checkout
/// must block on it.
pub fn price_by_distance(
    origin: Coordinates,
    destination: Coordinates,
    price_per_km: f64,
    min_fee: f64,
    max_range_km: f64,
) -> DeliveryQuote {
    let distance_km = round2(haversine_km(origin, destination));
    let raw = distance_km * price_per_km;
    let fee = round2(if min_fee > 0.0 { raw.max(min_fee) } else { raw });
    let within_range = distance_km <= max_range_km;

    let message = if within_range {
        format!("Delivery fee: ${fee:.2} ({distance_km:.1} km)")
    } else {
        format!(
            "Address is outside the delivery area ({distance_km:.1} km, max {max_range_km:.0} km)"
        )
    };

    DeliveryQuote::Distance {
        fee,
        distance_km,
        within_range,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };

    /// A point `km` kilometers due north of the origin
    fn north_of_origin(km: f64) -> Coordinates {
        Coordinates {
            lat: km / 111.195,
            lng: 0.0,
        }
    }

    #[test]
    fn haversine_matches_one_degree_of_latitude() {
        let d = haversine_km(ORIGIN, Coordinates { lat: 1.0, lng: 0.0 });
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        assert_eq!(haversine_km(ORIGIN, ORIGIN), 0.0);
    }

    #[test]
    fn min_fee_floors_short_trips() {
        // 1 km at $15/km is below the $20 floor
        let quote = price_by_distance(ORIGIN, north_of_origin(1.0), 15.0, 20.0, 7.0);
        match quote {
            DeliveryQuote::Distance {
                fee,
                distance_km,
                within_range,
                ..
            } => {
                assert_eq!(fee, 20.0);
                assert!((distance_km - 1.0).abs() < 0.01);
                assert!(within_range);
            }
            other => panic!("expected distance quote, got {other:?}"),
        }
    }

    #[test]
    fn zero_min_fee_disables_the_floor() {
        let quote = price_by_distance(ORIGIN, north_of_origin(1.0), 15.0, 0.0, 7.0);
        assert_eq!(quote.fee(), Some(15.0));
    }

    #[test]
    fn out_of_range_quote_is_not_actionable() {
        let quote = price_by_distance(ORIGIN, north_of_origin(8.0), 15.0, 20.0, 7.0);
        match &quote {
            DeliveryQuote::Distance {
                fee,
                within_range,
                message,
                ..
            } => {
                // fee still computed for display
                assert_eq!(*fee, 120.0);
                assert!(!within_range);
                assert!(message.contains("outside the delivery area"));
            }
            other => panic!("expected distance quote, got {other:?}"),
        }
        assert!(!quote.is_actionable());
        assert_eq!(quote.fee(), None);
    }

    #[test]
    fn boundary_distance_is_within_range() {
        let quote = price_by_distance(ORIGIN, north_of_origin(7.0), 15.0, 20.0, 7.0);
        assert!(quote.is_actionable());
    }
}
