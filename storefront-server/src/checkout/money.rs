//! Money arithmetic
//!
//! Models store `f64` for serialization, but every calculation runs through
//! `Decimal` and rounds to 2 places half-up before leaving this module.

use rust_decimal::prelude::*;
use shared::{AppError, AppResult, ErrorCode};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed monetary amount per field
const MAX_AMOUNT: f64 = 1_000_000.0;

fn to_decimal(value: f64, field: &str) -> AppResult<Decimal> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a finite number, got {value}"),
        ));
    }
    if value < 0.0 || value > MAX_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} out of range: {value}"),
        ));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} not representable: {value}"),
        )
    })
}

fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Round to 2 decimal places, half-up
pub fn round2(value: f64) -> f64 {
    Decimal::from_f64(value).map(to_f64).unwrap_or(0.0)
}

/// unit_price * quantity, rounded
pub fn line_total(unit_price: f64, quantity: i64) -> AppResult<f64> {
    let price = to_decimal(unit_price, "unit_price")?;
    Ok(to_f64(price * Decimal::from(quantity)))
}

/// Sum of already-rounded amounts, rounded
pub fn sum(amounts: impl IntoIterator<Item = f64>) -> f64 {
    let total: Decimal = amounts
        .into_iter()
        .filter_map(Decimal::from_f64)
        .sum();
    to_f64(total)
}

/// subtotal + delivery fee
pub fn order_total(subtotal: f64, delivery_fee: f64) -> AppResult<f64> {
    let s = to_decimal(subtotal, "subtotal")?;
    let f = to_decimal(delivery_fee, "delivery_fee")?;
    Ok(to_f64(s + f))
}

/// Cash reconciliation: change due and whether the tendered amount covers
/// the total in full. The comparison is strict: a single cent short is
/// still short.
pub fn reconcile_cash(tendered: f64, total: f64) -> AppResult<(f64, bool)> {
    let t = to_decimal(tendered, "cash_amount")?;
    let o = to_decimal(total, "total")?;
    let valid = t >= o;
    let change = (t - o).max(Decimal::ZERO);
    Ok((to_f64(change), valid))
}
