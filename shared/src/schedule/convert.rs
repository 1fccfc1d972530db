//! Schedule format conversion
//!
//! Three shapes reach us from storage and older clients:
//!
//! * the canonical [`UnifiedSchedule`] (editor shape, `isOpen`/`periods`)
//! * the slot shape: per-day `isAvailable` plus `"HH:MM-HH:MM"` strings
//! * legacy service hours: per-day `isOpen`/`openTime`/`closeTime`
//!
//! [`parse_schedule_json`] is the single parse boundary. Everything past it
//! operates on `UnifiedSchedule` only; a blob that matches none of the
//! shapes normalizes to the all-closed default rather than failing open.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{DaySchedule, OperatingHours, Period, UnifiedSchedule};
use crate::error::{AppError, AppResult, ErrorCode};

/// One day in the slot-based transport shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotDay {
    pub is_available: bool,
    #[serde(default)]
    pub slots: Vec<String>,
}

/// Slot-based transport shape, seven fixed keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SlotSchedule {
    pub monday: SlotDay,
    pub tuesday: SlotDay,
    pub wednesday: SlotDay,
    pub thursday: SlotDay,
    pub friday: SlotDay,
    pub saturday: SlotDay,
    pub sunday: SlotDay,
}

/// One day in the legacy service-hours shape: a single open/close pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHoursDay {
    pub is_open: bool,
    #[serde(default)]
    pub open_time: String,
    #[serde(default)]
    pub close_time: String,
}

/// Legacy service-hours shape, seven fixed keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceHours {
    pub monday: ServiceHoursDay,
    pub tuesday: ServiceHoursDay,
    pub wednesday: ServiceHoursDay,
    pub thursday: ServiceHoursDay,
    pub friday: ServiceHoursDay,
    pub saturday: ServiceHoursDay,
    pub sunday: ServiceHoursDay,
}

/// Split `"open-close"` slot strings into periods.
///
/// The two halves are kept verbatim so that converting back reproduces the
/// source byte-for-byte. Both halves must still parse as times.
pub fn slots_to_periods(slots: &[String]) -> AppResult<Vec<Period>> {
    slots
        .iter()
        .map(|slot| {
            let (open, close) = slot
                .split_once('-')
                .ok_or_else(|| bad_slot(slot, "missing '-' separator"))?;
            if super::eval::parse_minutes(open).is_none() {
                return Err(bad_slot(slot, "unparsable open time"));
            }
            if super::eval::parse_minutes(close).is_none() {
                return Err(bad_slot(slot, "unparsable close time"));
            }
            Ok(Period::new(open, close))
        })
        .collect()
}

/// Join periods back into `"open-close"` slot strings
pub fn periods_to_slots(periods: &[Period]) -> Vec<String> {
    periods
        .iter()
        .map(|p| format!("{}-{}", p.open, p.close))
        .collect()
}

fn bad_slot(slot: &str, detail: &str) -> AppError {
    AppError::new(ErrorCode::InvalidTimeFormat)
        .with_detail("slot", slot.to_string())
        .with_detail("detail", detail.to_string())
}

/// Slot shape to canonical. Delivery options and exceptions are not carried
/// by the slot shape and come out as defaults.
pub fn from_slot_schedule(slots: &SlotSchedule) -> AppResult<UnifiedSchedule> {
    let day = |d: &SlotDay| -> AppResult<DaySchedule> {
        Ok(DaySchedule {
            is_open: d.is_available,
            periods: slots_to_periods(&d.slots)?,
        })
    };
    Ok(UnifiedSchedule {
        operating_hours: OperatingHours {
            monday: day(&slots.monday)?,
            tuesday: day(&slots.tuesday)?,
            wednesday: day(&slots.wednesday)?,
            thursday: day(&slots.thursday)?,
            friday: day(&slots.friday)?,
            saturday: day(&slots.saturday)?,
            sunday: day(&slots.sunday)?,
        },
        ..UnifiedSchedule::default()
    })
}

/// Canonical to slot shape
pub fn to_slot_schedule(schedule: &UnifiedSchedule) -> SlotSchedule {
    let day = |d: &DaySchedule| SlotDay {
        is_available: d.is_open,
        slots: periods_to_slots(&d.periods),
    };
    let h = &schedule.operating_hours;
    SlotSchedule {
        monday: day(&h.monday),
        tuesday: day(&h.tuesday),
        wednesday: day(&h.wednesday),
        thursday: day(&h.thursday),
        friday: day(&h.friday),
        saturday: day(&h.saturday),
        sunday: day(&h.sunday),
    }
}

/// Legacy service hours to canonical: each open day becomes one period
pub fn from_service_hours(hours: &ServiceHours) -> UnifiedSchedule {
    let day = |d: &ServiceHoursDay| {
        let open = d.is_open
            && super::eval::parse_minutes(&d.open_time).is_some()
            && super::eval::parse_minutes(&d.close_time).is_some();
        DaySchedule {
            is_open: open,
            periods: if open {
                vec![Period::new(d.open_time.clone(), d.close_time.clone())]
            } else {
                vec![]
            },
        }
    };
    UnifiedSchedule {
        operating_hours: OperatingHours {
            monday: day(&hours.monday),
            tuesday: day(&hours.tuesday),
            wednesday: day(&hours.wednesday),
            thursday: day(&hours.thursday),
            friday: day(&hours.friday),
            saturday: day(&hours.saturday),
            sunday: day(&hours.sunday),
        },
        ..UnifiedSchedule::default()
    }
}

/// Parse a stored schedule blob into the canonical shape.
///
/// Tries the canonical shape first, then the slot shape, then legacy
/// service hours. A blob matching none of them yields the all-closed
/// default with a warning; the store reads as closed, never as always-open.
pub fn parse_schedule_json(raw: &str) -> UnifiedSchedule {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("unparsable schedule blob, treating store as closed: {e}");
            return UnifiedSchedule::default();
        }
    };
    if value.get("operatingHours").is_some() {
        if let Ok(schedule) = serde_json::from_value::<UnifiedSchedule>(value.clone()) {
            return schedule;
        }
    }
    if let Ok(slots) = serde_json::from_value::<SlotSchedule>(value.clone()) {
        match from_slot_schedule(&slots) {
            Ok(schedule) => return schedule,
            Err(e) => warn!("slot schedule rejected: {e}"),
        }
    }
    if let Ok(hours) = serde_json::from_value::<ServiceHours>(value) {
        return from_service_hours(&hours);
    }
    warn!("schedule blob matched no known shape, treating store as closed");
    UnifiedSchedule::default()
}
