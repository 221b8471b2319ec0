//! Business-hours resolution for the timetable grid.
//!
//! All default-value policy lives here: missing records, closed days and
//! malformed windows degrade to the defaults so the caller always gets a
//! usable grid configuration, never an error.

use crate::api::{BusinessHours, TimeOfDay, TimeSlotConfig};

/// Default opening time when no business-hours record applies.
pub const DEFAULT_OPEN: TimeOfDay = TimeOfDay::from_minutes(9 * 60);
/// Default closing time when no business-hours record applies.
pub const DEFAULT_CLOSE: TimeOfDay = TimeOfDay::from_minutes(19 * 60);
/// Default row granularity in minutes.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 30;

/// Resolve the grid configuration for one (salon, day-of-week) pair.
///
/// The open/close window comes from the business-hours record when one
/// exists, is not marked closed, and has `open <= close`; anything else
/// falls back to 09:00–19:00. The interval is resolved independently
/// from the per-salon setting (it is not tied to day-of-week) and falls
/// back to 30 when absent or non-positive.
pub fn resolve(hours: Option<BusinessHours>, interval_minutes: Option<u32>) -> TimeSlotConfig {
    let (open, close) = match hours {
        Some(record) if !record.is_closed && record.open <= record.close => {
            (record.open, record.close)
        }
        _ => (DEFAULT_OPEN, DEFAULT_CLOSE),
    };

    let interval_minutes = match interval_minutes {
        Some(interval) if interval > 0 => interval,
        _ => DEFAULT_INTERVAL_MINUTES,
    };

    TimeSlotConfig {
        open,
        close,
        interval_minutes,
    }
}
