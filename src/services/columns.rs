//! Staff column resolution: which staff appear as grid columns for the
//! day, and the shift window inferred for each.
//!
//! There is no shift table here. Shift bounds come from the day's
//! appointments alone: the window starts as the first appointment's
//! `[start, end]` and widens to cover every later one. Callers with real
//! shift records may substitute their own windows before placement.

use std::collections::HashMap;

use crate::api::{Appointment, StaffId, StaffShift};

/// Resolve the day's staff columns from its appointment list.
///
/// Staff with zero appointments produce no column. Columns are ordered by
/// earliest appointment start; ties keep first-encounter order so the
/// output is deterministic for identical inputs.
pub fn resolve_columns(appointments: &[Appointment]) -> Vec<StaffShift> {
    let mut columns: Vec<StaffShift> = Vec::new();
    let mut index_by_staff: HashMap<StaffId, usize> = HashMap::new();

    for appointment in appointments {
        match index_by_staff.get(&appointment.staff_id) {
            Some(&index) => {
                let column = &mut columns[index];
                column.shift_start = column.shift_start.min(appointment.start);
                column.shift_end = column.shift_end.max(appointment.end);
            }
            None => {
                index_by_staff.insert(appointment.staff_id, columns.len());
                columns.push(StaffShift {
                    staff_id: appointment.staff_id,
                    name: appointment.display.staff_name.clone(),
                    color_tag: appointment.display.color_tag.clone(),
                    shift_start: appointment.start,
                    shift_end: appointment.end,
                });
            }
        }
    }

    // Stable: equal shift starts keep encounter order.
    columns.sort_by_key(|column| column.shift_start);
    columns
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod columns_tests;
