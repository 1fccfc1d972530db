//! Schedule evaluation
//!
//! Pure functions over [`UnifiedSchedule`]. Callers pass `now` explicitly;
//! nothing here reads the clock.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::types::{Period, UnifiedSchedule};
use crate::error::ErrorCode;

/// Parse "HH:MM" (one- or two-digit hour) to minutes since midnight
pub fn parse_minutes(s: &str) -> Option<u32> {
    let (h, m) = s.split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Effective periods for a calendar date: an exception entry for that exact
/// date overrides the weekday default. Returns None when the day is closed.
fn periods_for_date(schedule: &UnifiedSchedule, date: NaiveDate) -> Option<Vec<Period>> {
    if let Some(exc) = schedule.exceptions.iter().find(|e| e.date == date) {
        if !exc.is_open {
            return None;
        }
        let weekday = schedule.operating_hours.day(date.weekday());
        return Some(match &exc.custom_hours {
            Some(hours) => hours.clone(),
            None => weekday.periods.clone(),
        });
    }
    let day = schedule.operating_hours.day(date.weekday());
    if day.is_open {
        Some(day.periods.clone())
    } else {
        None
    }
}

/// Is the store open at `instant`?
///
/// Period bounds are inclusive on both ends. An open day with no periods
/// counts as closed for every instant.
pub fn is_open_at(schedule: &UnifiedSchedule, instant: NaiveDateTime) -> bool {
    let Some(periods) = periods_for_date(schedule, instant.date()) else {
        return false;
    };
    let t = instant.time().hour() * 60 + instant.time().minute();
    periods.iter().any(|p| {
        match (parse_minutes(&p.open), parse_minutes(&p.close)) {
            (Some(open), Some(close)) => open <= t && t <= close,
            // unparsable period never matches
            _ => false,
        }
    })
}

/// Why a requested slot was rejected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotInvalidReason {
    SchedulingDisabled,
    TooSoon,
    TooFarAhead,
    OutsideHours,
}

impl SlotInvalidReason {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SlotInvalidReason::SchedulingDisabled => ErrorCode::SchedulingDisabled,
            SlotInvalidReason::TooSoon => ErrorCode::SlotTooSoon,
            SlotInvalidReason::TooFarAhead => ErrorCode::SlotTooFarAhead,
            SlotInvalidReason::OutsideHours => ErrorCode::SlotOutsideHours,
        }
    }
}

/// Result of a slot validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SlotInvalidReason>,
}

impl SlotCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn fail(reason: SlotInvalidReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Validate a requested fulfillment slot against the delivery-window policy.
///
/// Checks run in order and the first failure wins: scheduling enabled,
/// minimum lead time, maximum horizon (calendar days, not 24h blocks),
/// then operating hours when `use_operating_hours` is set.
pub fn validate_slot(
    schedule: &UnifiedSchedule,
    requested: NaiveDateTime,
    now: NaiveDateTime,
) -> SlotCheck {
    let opts = &schedule.delivery_options;
    if !opts.scheduled {
        return SlotCheck::fail(SlotInvalidReason::SchedulingDisabled);
    }
    if requested < now + chrono::Duration::hours(opts.min_advance_hours) {
        return SlotCheck::fail(SlotInvalidReason::TooSoon);
    }
    // a negative horizon clamps to same-day; a date overflow rejects
    let days = Days::new(u64::try_from(opts.max_advance_days).unwrap_or(0));
    let horizon = now.date().checked_add_days(days);
    if horizon.is_none_or(|h| requested.date() > h) {
        return SlotCheck::fail(SlotInvalidReason::TooFarAhead);
    }
    if opts.use_operating_hours && !is_open_at(schedule, requested) {
        return SlotCheck::fail(SlotInvalidReason::OutsideHours);
    }
    SlotCheck::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::{DaySchedule, ScheduleException};
    use chrono::NaiveTime;

    fn dt(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::new(
            date.parse::<NaiveDate>().unwrap(),
            time.parse::<NaiveTime>().unwrap(),
        )
    }

    fn weekday_schedule() -> UnifiedSchedule {
        // 2026-08-24 is a Monday
        let mut s = UnifiedSchedule::default();
        s.operating_hours.monday = DaySchedule {
            is_open: true,
            periods: vec![
                Period::new("09:00", "14:00"),
                Period::new("17:00", "22:00"),
            ],
        };
        s
    }

    #[test]
    fn parse_minutes_accepts_short_hours() {
        assert_eq!(parse_minutes("9:00"), Some(540));
        assert_eq!(parse_minutes("09:00"), Some(540));
        assert_eq!(parse_minutes("23:59"), Some(1439));
        assert_eq!(parse_minutes("24:00"), None);
        assert_eq!(parse_minutes("9:5"), None);
        assert_eq!(parse_minutes("0900"), None);
    }

    #[test]
    fn open_bounds_are_inclusive() {
        let s = weekday_schedule();
        assert!(is_open_at(&s, dt("2026-08-24", "09:00:00")));
        assert!(is_open_at(&s, dt("2026-08-24", "14:00:00")));
        assert!(!is_open_at(&s, dt("2026-08-24", "08:59:00")));
        assert!(!is_open_at(&s, dt("2026-08-24", "14:01:00")));
        // gap between periods
        assert!(!is_open_at(&s, dt("2026-08-24", "15:30:00")));
        assert!(is_open_at(&s, dt("2026-08-24", "17:00:00")));
    }

    #[test]
    fn closed_weekday_is_closed_all_day() {
        let s = weekday_schedule();
        // Tuesday has no hours set
        assert!(!is_open_at(&s, dt("2026-08-25", "12:00:00")));
    }

    #[test]
    fn open_day_with_empty_periods_is_closed() {
        let mut s = UnifiedSchedule::default();
        s.operating_hours.monday = DaySchedule {
            is_open: true,
            periods: vec![],
        };
        assert!(!is_open_at(&s, dt("2026-08-24", "12:00:00")));
    }

    #[test]
    fn exception_closes_an_open_weekday() {
        let mut s = weekday_schedule();
        s.exceptions.push(ScheduleException {
            date: "2026-08-24".parse().unwrap(),
            is_open: false,
            reason: Some("feriado".into()),
            custom_hours: None,
        });
        assert!(!is_open_at(&s, dt("2026-08-24", "10:00:00")));
        // the following Monday keeps the weekday default
        assert!(is_open_at(&s, dt("2026-08-31", "10:00:00")));
    }

    #[test]
    fn exception_custom_hours_replace_weekday_periods() {
        let mut s = weekday_schedule();
        s.exceptions.push(ScheduleException {
            date: "2026-08-24".parse().unwrap(),
            is_open: true,
            reason: None,
            custom_hours: Some(vec![Period::new("12:00", "16:00")]),
        });
        assert!(!is_open_at(&s, dt("2026-08-24", "09:30:00")));
        assert!(is_open_at(&s, dt("2026-08-24", "12:00:00")));
        assert!(is_open_at(&s, dt("2026-08-24", "16:00:00")));
    }

    #[test]
    fn exception_open_without_custom_hours_keeps_weekday_periods() {
        let mut s = UnifiedSchedule::default();
        s.operating_hours.monday = DaySchedule {
            is_open: true,
            periods: vec![Period::new("09:00", "14:00")],
        };
        s.exceptions.push(ScheduleException {
            date: "2026-08-24".parse().unwrap(),
            is_open: true,
            reason: None,
            custom_hours: None,
        });
        assert!(is_open_at(&s, dt("2026-08-24", "10:00:00")));
    }

    fn scheduling_schedule() -> UnifiedSchedule {
        let mut s = weekday_schedule();
        s.delivery_options.scheduled = true;
        s.delivery_options.min_advance_hours = 2;
        s.delivery_options.max_advance_days = 3;
        s.delivery_options.use_operating_hours = true;
        s
    }

    #[test]
    fn slot_rejected_when_scheduling_disabled() {
        let mut s = scheduling_schedule();
        s.delivery_options.scheduled = false;
        let check = validate_slot(
            &s,
            dt("2026-08-24", "12:00:00"),
            dt("2026-08-24", "09:00:00"),
        );
        assert_eq!(check.reason, Some(SlotInvalidReason::SchedulingDisabled));
    }

    #[test]
    fn slot_lead_time_is_enforced() {
        let s = scheduling_schedule();
        let now = dt("2026-08-24", "09:00:00");
        let too_soon = validate_slot(&s, dt("2026-08-24", "10:30:00"), now);
        assert_eq!(too_soon.reason, Some(SlotInvalidReason::TooSoon));
        // exactly at now + 2h is allowed
        let boundary = validate_slot(&s, dt("2026-08-24", "11:00:00"), now);
        assert!(boundary.valid);
    }

    #[test]
    fn slot_horizon_counts_calendar_days() {
        let s = scheduling_schedule();
        let now = dt("2026-08-24", "22:00:00");
        // 3 calendar days out: any time on the 27th is in range
        let mut far = validate_slot(&s, dt("2026-08-27", "23:00:00"), now);
        assert_ne!(far.reason, Some(SlotInvalidReason::TooFarAhead));
        far = validate_slot(&s, dt("2026-08-28", "09:00:00"), now);
        assert_eq!(far.reason, Some(SlotInvalidReason::TooFarAhead));
    }

    #[test]
    fn negative_horizon_clamps_to_same_day() {
        // unvalidated input straight from parsing must not panic
        let mut s = scheduling_schedule();
        s.delivery_options.max_advance_days = -1;
        let now = dt("2026-08-24", "09:00:00");
        let tomorrow = validate_slot(&s, dt("2026-08-25", "12:00:00"), now);
        assert_eq!(tomorrow.reason, Some(SlotInvalidReason::TooFarAhead));
        let today = validate_slot(&s, dt("2026-08-24", "12:00:00"), now);
        assert!(today.valid);
    }

    #[test]
    fn slot_outside_hours_rejected_when_coupled() {
        let s = scheduling_schedule();
        let now = dt("2026-08-24", "07:00:00");
        let closed = validate_slot(&s, dt("2026-08-24", "15:00:00"), now);
        assert_eq!(closed.reason, Some(SlotInvalidReason::OutsideHours));
        let open = validate_slot(&s, dt("2026-08-24", "12:00:00"), now);
        assert!(open.valid);
    }

    #[test]
    fn slot_hours_ignored_when_decoupled() {
        let mut s = scheduling_schedule();
        s.delivery_options.use_operating_hours = false;
        let now = dt("2026-08-24", "07:00:00");
        let check = validate_slot(&s, dt("2026-08-24", "15:00:00"), now);
        assert!(check.valid);
    }

    #[test]
    fn first_failing_check_wins() {
        // a slot both too soon and outside hours reports too soon
        let s = scheduling_schedule();
        let now = dt("2026-08-24", "14:30:00");
        let check = validate_slot(&s, dt("2026-08-24", "15:00:00"), now);
        assert_eq!(check.reason, Some(SlotInvalidReason::TooSoon));
    }
}
