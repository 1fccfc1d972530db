//! Checkout submission
//!
//! Re-prices the cart from the catalog, gates on the schedule, resolves
//! the delivery fee, reconciles cash, then persists and relays the order.
//! Persistence and the WhatsApp relay are independent best-effort side
//! effects; a failed insert never blocks the relay.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::models::{
    Coordinates, DeliveryMethod, Order, OrderItemLine, OrderStatus, PaymentMethod, Store,
};
use shared::schedule::{self, UnifiedSchedule};
use shared::util::{now_millis, order_number, snowflake_id};
use shared::{AppError, AppResult, ErrorCode};
use validator::Validate;

use super::{cart, cart::CartLineInput, money};
use crate::core::ServerState;
use crate::db::repository::{delivery_zone, order as order_repo, product as product_repo, store as store_repo};
use crate::delivery::{resolve_delivery_fee, DeliveryQuote, DeliveryRequest};
use crate::notify::format_order_message;

/// Requested slot wire format, store-local time
const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, max = 120))]
    pub customer_name: String,
    #[validate(length(min = 5, max = 20))]
    pub customer_phone: String,
    pub delivery_method: DeliveryMethod,
    #[serde(default)]
    pub delivery_address: Option<String>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub cash_amount: Option<f64>,
    pub lines: Vec<CartLineInput>,
    /// Destination coordinates (distance method)
    #[serde(default)]
    pub destination: Option<Coordinates>,
    /// Selected zone (zones method)
    #[serde(default)]
    pub zone_id: Option<i64>,
    /// Requested slot, `YYYY-MM-DD HH:MM`; None = ASAP
    #[serde(default)]
    pub scheduled_for: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutOutcome {
    pub order: Order,
    /// False when the database write failed; the WhatsApp relay still ran
    pub persisted: bool,
    /// The text relayed to the store owner
    pub message: String,
}

/// Validate the requested timing against the store schedule.
///
/// ASAP orders need the store open right now; scheduled orders go through
/// slot validation. Returns the normalized slot string to persist.
pub fn check_timing(
    schedule: &UnifiedSchedule,
    scheduled_for: Option<&str>,
    now: NaiveDateTime,
) -> AppResult<Option<String>> {
    match scheduled_for {
        None => {
            if !schedule.delivery_options.immediate {
                return Err(AppError::invalid_request(
                    "This store only accepts scheduled orders",
                ));
            }
            if !schedule::is_open_at(schedule, now) {
                return Err(AppError::precondition(ErrorCode::StoreClosed));
            }
            Ok(None)
        }
        Some(raw) => {
            let requested = NaiveDateTime::parse_from_str(raw, SLOT_FORMAT).map_err(|_| {
                AppError::precondition(ErrorCode::InvalidTimeFormat)
                    .with_detail("scheduled_for", raw.to_string())
            })?;
            let check = schedule::validate_slot(schedule, requested, now);
            if let Some(reason) = check.reason {
                return Err(AppError::precondition(reason.error_code())
                    .with_detail("scheduled_for", raw.to_string()));
            }
            Ok(Some(requested.format(SLOT_FORMAT).to_string()))
        }
    }
}

/// Submit a checkout for a store. Returns the assembled order whether or
/// not persistence succeeded.
pub async fn submit(
    state: &ServerState,
    store: &Store,
    request: CheckoutRequest,
) -> AppResult<CheckoutOutcome> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let merged = cart::merge_lines(request.lines);
    if merged.is_empty() {
        return Err(AppError::precondition(ErrorCode::OrderEmpty));
    }

    let pool = &state.db.pool;
    let schedule = store_repo::load_schedule(pool, store.id).await?;

    if request.delivery_method == DeliveryMethod::Delivery
        && !schedule.delivery_options.enabled
    {
        return Err(AppError::precondition(ErrorCode::DeliveryDisabled));
    }
    if request.delivery_method == DeliveryMethod::Pickup && !schedule.delivery_options.pickup {
        return Err(AppError::invalid_request("This store does not offer pickup"));
    }

    let now = Local::now().naive_local();
    let scheduled_for = check_timing(&schedule, request.scheduled_for.as_deref(), now)?;

    // Re-price every line from the catalog; client prices are ignored
    let mut items: Vec<OrderItemLine> = Vec::with_capacity(merged.len());
    for line in &merged {
        let product = product_repo::find_by_id(pool, line.product_id)
            .await?
            .filter(|p| p.store_id == store.id)
            .ok_or_else(|| {
                AppError::precondition(ErrorCode::ProductNotFound)
                    .with_detail("product_id", line.product_id)
            })?;
        items.push(cart::price_line(&product, line)?);
    }
    let subtotal = cart::subtotal(&items);

    // Delivery method gate: pickup never invokes the resolver
    let (delivery_fee, fee_pending, delivery_zone_name) = match request.delivery_method {
        DeliveryMethod::Pickup => (0.0, false, None),
        DeliveryMethod::Delivery => {
            if request
                .delivery_address
                .as_deref()
                .map_or(true, |a| a.trim().is_empty())
            {
                return Err(AppError::validation("Delivery address is required"));
            }
            let zones = delivery_zone::find_active(pool, store.id).await?;
            let quote = resolve_delivery_fee(
                store,
                &zones,
                &DeliveryRequest {
                    destination: request.destination,
                    zone_id: request.zone_id,
                    subtotal,
                },
            )?;
            if !quote.is_actionable() {
                return Err(AppError::precondition(ErrorCode::DeliveryOutOfRange)
                    .with_detail("message", quote.message().to_string()));
            }
            let zone_name = match &quote {
                DeliveryQuote::Zone { zone_name, .. } => Some(zone_name.clone()),
                _ => None,
            };
            let pending = matches!(quote, DeliveryQuote::Manual { .. });
            (quote.fee().unwrap_or(0.0), pending, zone_name)
        }
    };

    let total = money::order_total(subtotal, delivery_fee)?;

    // Cash reconciliation: insufficient cash is a hard precondition failure
    let (cash_amount, change_due) = match request.payment_method {
        PaymentMethod::Cash => {
            let tendered = request
                .cash_amount
                .ok_or_else(|| AppError::precondition(ErrorCode::CashAmountMissing))?;
            let (change, valid) = money::reconcile_cash(tendered, total)?;
            if !valid {
                return Err(AppError::precondition(ErrorCode::CashInsufficient)
                    .with_detail("total", total)
                    .with_detail("tendered", tendered));
            }
            (Some(tendered), Some(change))
        }
        PaymentMethod::BankTransfer => (None, None),
    };

    let order = Order {
        id: snowflake_id(),
        store_id: store.id,
        order_number: order_number(Local::now()),
        customer_name: request.customer_name,
        customer_phone: request.customer_phone,
        delivery_method: request.delivery_method,
        delivery_address: request.delivery_address,
        delivery_zone_name,
        payment_method: request.payment_method,
        cash_amount,
        change_due,
        items,
        subtotal,
        delivery_fee,
        fee_pending,
        total,
        status: OrderStatus::Pending,
        scheduled_for,
        notes: request.notes,
        created_at: now_millis(),
        updated_at: None,
    };

    // Best-effort persist; the WhatsApp relay is the primary channel
    let persisted = match order_repo::insert(pool, &order).await {
        Ok(()) => true,
        Err(e) => {
            state.reporter.report("order persistence", &e.into());
            false
        }
    };

    let message = format_order_message(&store.name, &order);
    let messenger = state.messenger.clone();
    let destination = store.whatsapp_number.clone();
    let text = message.clone();
    tokio::spawn(async move {
        messenger.send(&destination, &text).await;
    });

    Ok(CheckoutOutcome {
        order,
        persisted,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use shared::schedule::{DaySchedule, Period};

    fn dt(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::new(
            date.parse::<NaiveDate>().unwrap(),
            time.parse::<NaiveTime>().unwrap(),
        )
    }

    fn open_mondays() -> UnifiedSchedule {
        // 2026-08-24 is a Monday
        let mut s = UnifiedSchedule::default();
        s.operating_hours.monday = DaySchedule {
            is_open: true,
            periods: vec![Period::new("09:00", "22:00")],
        };
        s.delivery_options.scheduled = true;
        s.delivery_options.min_advance_hours = 1;
        s.delivery_options.max_advance_days = 7;
        s
    }

    #[test]
    fn asap_requires_the_store_open_now() {
        let s = open_mondays();
        let err = check_timing(&s, None, dt("2026-08-24", "07:00:00")).unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreClosed);
        let slot = check_timing(&s, None, dt("2026-08-24", "12:00:00")).unwrap();
        assert_eq!(slot, None);
    }

    #[test]
    fn asap_rejected_when_immediate_disabled() {
        let mut s = open_mondays();
        s.delivery_options.immediate = false;
        let err = check_timing(&s, None, dt("2026-08-24", "12:00:00")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn scheduled_slot_is_validated_and_normalized() {
        let s = open_mondays();
        let now = dt("2026-08-24", "09:00:00");
        let slot = check_timing(&s, Some("2026-08-24 12:30"), now).unwrap();
        assert_eq!(slot.as_deref(), Some("2026-08-24 12:30"));

        let err = check_timing(&s, Some("2026-08-24 09:30"), now).unwrap_err();
        assert_eq!(err.code, ErrorCode::SlotTooSoon);

        // next Tuesday is closed
        let err = check_timing(&s, Some("2026-08-25 12:00"), now).unwrap_err();
        assert_eq!(err.code, ErrorCode::SlotOutsideHours);
    }

    #[test]
    fn unparsable_slot_is_a_time_format_error() {
        let s = open_mondays();
        let err = check_timing(&s, Some("mañana"), dt("2026-08-24", "12:00:00")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTimeFormat);
    }
}
