//! Time-slot generation: turns a resolved `TimeSlotConfig` into the
//! ordered list of row labels for the grid.

use crate::api::{TimeOfDay, TimeSlotConfig};

/// Interval threshold (minutes) at or below which a pre-opening row is
/// prepended, so an appointment ending exactly at opening, or the visual
/// boundary marker, has somewhere to render.
const PRE_OPENING_MAX_INTERVAL: u32 = 30;

/// Generate the grid's row labels for the given configuration.
///
/// The sequence is:
/// 1. `open - interval` when `interval <= 30` (skipped when that would
///    underflow midnight);
/// 2. every `interval` minutes from `open` while `<= close`, inclusive;
/// 3. `close` itself appended when the stride did not land on it exactly,
///    yielding a shortened final interval.
///
/// Consecutive duplicates are removed; the result is non-decreasing and
/// always ends at `close`.
pub fn generate_slots(config: &TimeSlotConfig) -> Vec<TimeOfDay> {
    let mut rows: Vec<TimeOfDay> = Vec::new();

    if config.interval_minutes <= PRE_OPENING_MAX_INTERVAL {
        if let Some(before_opening) = config.open.minus_minutes(config.interval_minutes) {
            rows.push(before_opening);
        }
    }

    let mut current = config.open;
    while current <= config.close {
        rows.push(current);
        match current.plus_minutes(config.interval_minutes) {
            Some(next) => current = next,
            None => break,
        }
    }

    if rows.last() != Some(&config.close) {
        rows.push(config.close);
    }

    rows.dedup();
    rows
}

#[cfg(test)]
#[path = "slots_tests.rs"]
mod slots_tests;
