//! Unified schedule model
//!
//! Answers two questions for a store: "is it open at instant T" and "is a
//! requested fulfillment slot valid". Weekly operating hours, the
//! delivery-window policy, and date-specific exceptions all live in one
//! canonical [`UnifiedSchedule`]; `convert` normalizes the persisted and
//! legacy shapes into it and `eval` holds the pure evaluation functions.

pub mod convert;
pub mod eval;
pub mod types;

pub use convert::{
    from_service_hours, from_slot_schedule, parse_schedule_json, periods_to_slots,
    slots_to_periods, to_slot_schedule, ServiceHours, ServiceHoursDay, SlotDay, SlotSchedule,
};
pub use eval::{is_open_at, validate_slot, SlotCheck, SlotInvalidReason};
pub use types::{
    DaySchedule, DeliveryOptions, OperatingHours, Period, ScheduleException, UnifiedSchedule,
};
