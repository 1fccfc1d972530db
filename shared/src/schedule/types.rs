//! Schedule data types
//!
//! The canonical in-memory shape is [`UnifiedSchedule`]. All persisted and
//! legacy representations are normalized into it at the parse boundary
//! (`convert`); evaluation code never touches raw JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// One open period within a day. Times are kept as the raw "HH:MM" strings
/// they arrived in so slot round-trips reproduce the source byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub open: String,
    pub close: String,
}

impl Period {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Weekly default for one weekday
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_open: bool,
    #[serde(default)]
    pub periods: Vec<Period>,
}

/// Weekly defaults, seven fixed keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperatingHours {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl OperatingHours {
    pub fn day(&self, weekday: chrono::Weekday) -> &DaySchedule {
        use chrono::Weekday::*;
        match weekday {
            Mon => &self.monday,
            Tue => &self.tuesday,
            Wed => &self.wednesday,
            Thu => &self.thursday,
            Fri => &self.friday,
            Sat => &self.saturday,
            Sun => &self.sunday,
        }
    }

    pub fn days(&self) -> [(&'static str, &DaySchedule); 7] {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ]
    }
}

/// Delivery-window policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOptions {
    pub enabled: bool,
    /// ASAP orders accepted
    pub immediate: bool,
    /// Future-slot orders accepted
    pub scheduled: bool,
    pub pickup: bool,
    /// Minimum lead time for a scheduled slot, hours
    pub min_advance_hours: i64,
    /// Maximum horizon for a scheduled slot, calendar days
    pub max_advance_days: i64,
    /// Scheduled slots must also fall inside operating hours
    pub use_operating_hours: bool,
}

impl Default for DeliveryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            immediate: true,
            scheduled: false,
            pickup: true,
            min_advance_hours: 1,
            max_advance_days: 7,
            use_operating_hours: true,
        }
    }
}

/// Date-specific override: replaces the weekday default for that one date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleException {
    pub date: NaiveDate,
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// When open, overrides the weekday's periods; None keeps them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hours: Option<Vec<Period>>,
}

/// Canonical schedule for one store
///
/// Created with all days closed on first settings access and replaced
/// wholesale on every save, never partially patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedSchedule {
    #[serde(default)]
    pub operating_hours: OperatingHours,
    #[serde(default)]
    pub delivery_options: DeliveryOptions,
    #[serde(default)]
    pub exceptions: Vec<ScheduleException>,
}

impl UnifiedSchedule {
    /// Structural validation, applied when the owner saves the editor.
    ///
    /// Open days must carry at least one period, every period must parse as
    /// "HH:MM" with open strictly before close (no overnight wraparound),
    /// and the advance-window bounds must be sane.
    pub fn validate(&self) -> AppResult<()> {
        for (name, day) in self.operating_hours.days() {
            if day.is_open {
                if day.periods.is_empty() {
                    return Err(schedule_err(format!("{name}: open day has no periods")));
                }
                validate_periods(name, &day.periods)?;
            }
        }
        for exc in &self.exceptions {
            if let Some(hours) = &exc.custom_hours {
                validate_periods(&exc.date.to_string(), hours)?;
            }
        }
        if self.delivery_options.min_advance_hours < 0 {
            return Err(schedule_err("minAdvanceHours must be >= 0".to_string()));
        }
        if self.delivery_options.max_advance_days < 1 {
            return Err(schedule_err("maxAdvanceDays must be >= 1".to_string()));
        }
        Ok(())
    }
}

fn validate_periods(scope: &str, periods: &[Period]) -> AppResult<()> {
    for p in periods {
        let open = super::eval::parse_minutes(&p.open)
            .ok_or_else(|| schedule_err(format!("{scope}: bad time '{}'", p.open)))?;
        let close = super::eval::parse_minutes(&p.close)
            .ok_or_else(|| schedule_err(format!("{scope}: bad time '{}'", p.close)))?;
        if open >= close {
            return Err(schedule_err(format!(
                "{scope}: period {}-{} must open before it closes",
                p.open, p.close
            )));
        }
    }
    Ok(())
}

fn schedule_err(detail: String) -> AppError {
    AppError::new(ErrorCode::ScheduleInvalid).with_detail("detail", detail)
}
