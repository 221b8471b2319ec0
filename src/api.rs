//! Public API surface for the salon backend.
//!
//! This file consolidates the DTO types shared between the grid engine,
//! the repository layer and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::routes::landing::SalonInfo;
pub use crate::routes::timetable::{
    ExcludedAppointment, ExclusionReason, Grid, PlacedBlock, StaffShift, StatusTag,
    TimetableConfig, TimetableData,
};

use serde::{Deserialize, Serialize};

pub use crate::models::{InvalidTimeFormat, TimeOfDay};

/// Salon identifier. Salons are the tenants of the system; every engine
/// invocation is scoped to exactly one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SalonId(pub i64);

/// Staff member identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId(pub i64);

/// Appointment identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub i64);

impl SalonId {
    pub fn new(value: i64) -> Self {
        SalonId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl StaffId {
    pub fn new(value: i64) -> Self {
        StaffId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AppointmentId {
    pub fn new(value: i64) -> Self {
        AppointmentId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SalonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SalonId> for i64 {
    fn from(id: SalonId) -> Self {
        id.0
    }
}

/// What an appointment slot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentKind {
    /// A customer booking.
    Customer,
    /// An internal task (cleaning, training, ...).
    Task,
    /// A break in the staff member's day.
    Break,
}

/// Booking status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked but not yet confirmed.
    Reserved,
    Confirmed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Styling category for the rendered block. Presentation only; never
    /// affects placement.
    pub fn status_tag(&self) -> Option<StatusTag> {
        match self {
            AppointmentStatus::Reserved => None,
            AppointmentStatus::Confirmed => Some(StatusTag::Confirmed),
            AppointmentStatus::Cancelled => Some(StatusTag::Cancelled),
            AppointmentStatus::NoShow => Some(StatusTag::NoShow),
        }
    }
}

/// Names already resolved by the storage layer for display inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub staff_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_tag: Option<String>,
}

/// One appointment on the target day, with times already parsed to minute
/// granularity. Immutable input to the grid engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub staff_id: StaffId,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
    pub display: DisplayFields,
}

/// Effective business hours for one (salon, day-of-week) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub is_closed: bool,
}

/// Resolved grid configuration: the open/close window and row granularity.
///
/// Invariants (enforced by the resolver, which degrades to defaults):
/// `interval_minutes > 0` and `close >= open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotConfig {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub interval_minutes: u32,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
