//! Grid assembly: combines rows, columns and placed blocks into the
//! final timetable structure, plus the out-of-shift cell computation and
//! a snapshot fingerprint.

use std::collections::BTreeSet;

use sha2::{Digest, Sha256};

use crate::api::{Grid, PlacedBlock, StaffShift, TimeOfDay};

/// Result of assembling a day's grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridOutcome {
    Ready(Grid),
    /// Zero columns resolved: the day has no usable content and the
    /// presentation layer should show its dedicated empty state.
    NoWorkingStaff,
}

impl GridOutcome {
    pub fn into_grid(self) -> Option<Grid> {
        match self {
            GridOutcome::Ready(grid) => Some(grid),
            GridOutcome::NoWorkingStaff => None,
        }
    }
}

/// Combine the row list, column list and placed blocks into a `Grid`.
///
/// Pure data transformation: every `(row, column)` pair whose row label
/// falls outside that column's half-open shift window lands in
/// `out_of_shift_cells` for styling.
pub fn assemble(columns: Vec<StaffShift>, rows: Vec<TimeOfDay>, blocks: Vec<PlacedBlock>) -> GridOutcome {
    if columns.is_empty() {
        return GridOutcome::NoWorkingStaff;
    }

    let mut out_of_shift_cells = BTreeSet::new();
    for (row_index, row) in rows.iter().enumerate() {
        for (column_index, column) in columns.iter().enumerate() {
            if !column.contains(*row) {
                out_of_shift_cells.insert((row_index, column_index));
            }
        }
    }

    GridOutcome::Ready(Grid {
        columns,
        rows,
        blocks,
        out_of_shift_cells,
    })
}

/// SHA-256 over the grid's canonical JSON.
///
/// Identical inputs produce identical grids, so the fingerprint makes
/// snapshots diffable between requests and backs the idempotence tests.
pub fn grid_fingerprint(grid: &Grid) -> String {
    let json = serde_json::to_string(grid).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{StaffId, TimeSlotConfig};
    use crate::services::slots;

    fn shift(staff: i64, start: &str, end: &str) -> StaffShift {
        StaffShift {
            staff_id: StaffId::new(staff),
            name: format!("staff-{}", staff),
            color_tag: None,
            shift_start: TimeOfDay::parse(start).unwrap(),
            shift_end: TimeOfDay::parse(end).unwrap(),
        }
    }

    fn rows() -> Vec<TimeOfDay> {
        slots::generate_slots(&TimeSlotConfig {
            open: TimeOfDay::parse("09:00").unwrap(),
            close: TimeOfDay::parse("12:00").unwrap(),
            interval_minutes: 30,
        })
    }

    #[test]
    fn test_no_columns_is_no_working_staff() {
        assert_eq!(assemble(vec![], rows(), vec![]), GridOutcome::NoWorkingStaff);
        assert_eq!(GridOutcome::NoWorkingStaff.into_grid(), None);
    }

    #[test]
    fn test_out_of_shift_cells_cover_rows_outside_window() {
        // Rows: 08:30 09:00 09:30 10:00 10:30 11:00 11:30 12:00.
        let outcome = assemble(vec![shift(1, "09:30", "11:00")], rows(), vec![]);
        let grid = outcome.into_grid().unwrap();

        let out: Vec<usize> = grid
            .out_of_shift_cells
            .iter()
            .map(|(row, _col)| *row)
            .collect();
        // 09:30, 10:00 and 10:30 are in-shift; 11:00 is excluded by the
        // half-open window.
        assert_eq!(out, vec![0, 1, 5, 6, 7]);
    }

    #[test]
    fn test_cells_computed_per_column() {
        let outcome = assemble(
            vec![shift(1, "08:30", "12:00"), shift(2, "10:00", "12:00")],
            rows(),
            vec![],
        );
        let grid = outcome.into_grid().unwrap();

        // Column 0 covers every row except the closing 12:00 boundary.
        assert!(grid.out_of_shift_cells.contains(&(7, 0)));
        assert!(!grid.out_of_shift_cells.contains(&(0, 0)));
        // Column 1 starts at 10:00.
        assert!(grid.out_of_shift_cells.contains(&(0, 1)));
        assert!(grid.out_of_shift_cells.contains(&(2, 1)));
        assert!(!grid.out_of_shift_cells.contains(&(3, 1)));
    }

    #[test]
    fn test_fingerprint_is_stable_and_input_sensitive() {
        let make = |end: &str| {
            assemble(vec![shift(1, "09:00", end)], rows(), vec![])
                .into_grid()
                .unwrap()
        };
        let a = make("11:00");
        let b = make("11:00");
        let c = make("11:30");
        assert_eq!(grid_fingerprint(&a), grid_fingerprint(&b));
        assert_ne!(grid_fingerprint(&a), grid_fingerprint(&c));
    }
}
