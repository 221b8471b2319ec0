use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::api::{AppointmentId, DisplayFields, SalonId, StaffId, TimeOfDay, TimeSlotConfig};

// =========================================================
// Timetable grid types
// =========================================================

/// One staff column for the rendered day, with the shift window inferred
/// from that staff member's appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffShift {
    pub staff_id: StaffId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_tag: Option<String>,
    pub shift_start: TimeOfDay,
    pub shift_end: TimeOfDay,
}

impl StaffShift {
    /// Whether `time` falls inside the half-open `[shift_start, shift_end)`
    /// window. A shift ending at 18:00 does not include the 18:00 row.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.shift_start <= time && time < self.shift_end
    }
}

/// Styling category derived from the appointment status. Presentation
/// only; placement ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    Confirmed,
    Cancelled,
    NoShow,
}

/// The rendered representation of one appointment: which column it sits
/// in, the row its start time anchors to, and how many rows it spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub appointment_id: AppointmentId,
    pub staff_column_index: usize,
    pub anchor_row_index: usize,
    pub row_span: u32,
    pub is_confirmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_tag: Option<StatusTag>,
    pub display: DisplayFields,
}

/// The assembled timetable: time rows by staff columns, with placed
/// blocks and the set of cells outside each column's shift window.
///
/// `out_of_shift_cells` is a `BTreeSet` so identical inputs always
/// serialize to byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: Vec<StaffShift>,
    pub rows: Vec<TimeOfDay>,
    pub blocks: Vec<PlacedBlock>,
    pub out_of_shift_cells: BTreeSet<(usize, usize)>,
}

// =========================================================
// Timetable endpoint DTOs
// =========================================================

/// Why an appointment was left out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// `staff_id` matched no resolved column.
    UnknownStaff,
    /// Start time fell between generated rows; no interpolation is done.
    UnmatchedStartTime,
    /// Start or end time failed `HH:MM[:SS]` parsing.
    InvalidTime,
}

/// One appointment excluded from the grid, with the reason. Exclusions
/// are a data-quality signal for the caller, never a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedAppointment {
    pub appointment_id: AppointmentId,
    pub reason: ExclusionReason,
}

/// Echo of the resolved configuration the grid was built with.
pub type TimetableConfig = TimeSlotConfig;

/// Timetable view-model for one (salon, date) pair.
///
/// `grid` is `None` exactly when `no_working_staff` is set: zero columns
/// resolved for the day, and the presentation layer should show its
/// dedicated empty state instead of an empty table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableData {
    pub salon_id: SalonId,
    pub date: chrono::NaiveDate,
    pub config: TimetableConfig,
    pub no_working_staff: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    /// SHA-256 of the serialized grid; present whenever `grid` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    pub excluded: Vec<ExcludedAppointment>,
}

/// Route function name constant for the timetable endpoint.
pub const GET_TIMETABLE: &str = "get_timetable";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TimeOfDay;

    fn shift(start: &str, end: &str) -> StaffShift {
        StaffShift {
            staff_id: StaffId::new(1),
            name: "Anna".to_string(),
            color_tag: None,
            shift_start: TimeOfDay::parse(start).unwrap(),
            shift_end: TimeOfDay::parse(end).unwrap(),
        }
    }

    #[test]
    fn test_shift_window_is_half_open() {
        let s = shift("09:00", "18:00");
        assert!(s.contains(TimeOfDay::parse("09:00").unwrap()));
        assert!(s.contains(TimeOfDay::parse("17:59").unwrap()));
        assert!(!s.contains(TimeOfDay::parse("18:00").unwrap()));
        assert!(!s.contains(TimeOfDay::parse("08:59").unwrap()));
    }

    #[test]
    fn test_out_of_shift_cells_serialize_sorted() {
        let mut cells = BTreeSet::new();
        cells.insert((3, 1));
        cells.insert((0, 0));
        cells.insert((3, 0));
        let grid = Grid {
            columns: vec![],
            rows: vec![],
            blocks: vec![],
            out_of_shift_cells: cells,
        };
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.contains("[[0,0],[3,0],[3,1]]"));
    }

    #[test]
    fn test_exclusion_reason_serialization() {
        let excluded = ExcludedAppointment {
            appointment_id: AppointmentId::new(7),
            reason: ExclusionReason::UnmatchedStartTime,
        };
        let json = serde_json::to_string(&excluded).unwrap();
        assert!(json.contains("unmatched_start_time"));
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_TIMETABLE, "get_timetable");
    }
}
