//! Appointment placement: maps each appointment to a column, an anchor
//! row and a vertical span, or classifies it as non-renderable.

use std::collections::HashMap;

use crate::api::{Appointment, AppointmentId, PlacedBlock, StaffShift, StatusTag, TimeOfDay};

/// Full classification of a day's appointments against the grid.
///
/// `blocks` are renderable; the remaining lists let the caller log the
/// exclusions (a data-quality signal, never a fatal error) without the
/// placer doing any I/O itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub blocks: Vec<PlacedBlock>,
    /// Attributed to a column but starting outside its `[start, end)`
    /// shift window; rendered without a content block.
    pub out_of_shift: Vec<AppointmentId>,
    /// Start time matched no generated row label exactly.
    pub unmatched_start: Vec<AppointmentId>,
    /// No column resolved for the appointment's staff id.
    pub unknown_staff: Vec<AppointmentId>,
}

/// Place every appointment against the resolved columns and rows.
///
/// Blocks keep the input order; overlapping appointments for one staff
/// member are all placed independently, with no collision resolution.
/// Conflict prevention belongs to the booking write path, not here.
pub fn place_appointments(
    appointments: &[Appointment],
    columns: &[StaffShift],
    rows: &[TimeOfDay],
    interval_minutes: u32,
) -> PlacementReport {
    let column_index: HashMap<_, _> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| (column.staff_id, index))
        .collect();
    let row_index: HashMap<TimeOfDay, usize> = rows
        .iter()
        .enumerate()
        .map(|(index, label)| (*label, index))
        .collect();

    let mut report = PlacementReport::default();

    for appointment in appointments {
        let Some(&staff_column_index) = column_index.get(&appointment.staff_id) else {
            report.unknown_staff.push(appointment.id);
            continue;
        };

        if !columns[staff_column_index].contains(appointment.start) {
            report.out_of_shift.push(appointment.id);
            continue;
        }

        // Exact match only: a start time between generated rows is not
        // interpolated onto a neighbouring slot.
        let Some(&anchor_row_index) = row_index.get(&appointment.start) else {
            report.unmatched_start.push(appointment.id);
            continue;
        };

        report.blocks.push(PlacedBlock {
            appointment_id: appointment.id,
            staff_column_index,
            anchor_row_index,
            row_span: row_span(appointment.start, appointment.end, interval_minutes),
            is_confirmed: appointment.status.status_tag() == Some(StatusTag::Confirmed),
            status_tag: appointment.status.status_tag(),
            display: appointment.display.clone(),
        });
    }

    report
}

/// Vertical extent in rows: `ceil(duration / interval)`, never below 1,
/// so a block is never rendered shorter than its real duration.
fn row_span(start: TimeOfDay, end: TimeOfDay, interval_minutes: u32) -> u32 {
    let duration_minutes = start.minutes_until(end);
    duration_minutes.div_ceil(interval_minutes).max(1)
}

#[cfg(test)]
#[path = "placer_tests.rs"]
mod placer_tests;
