//! Data Transfer Objects for the HTTP API.
//!
//! The timetable response itself is re-exported from the routes module
//! since it already derives Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Landing
    SalonInfo,
    // Timetable
    ExcludedAppointment, ExclusionReason, Grid, PlacedBlock, StaffShift, TimetableConfig,
    TimetableData,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}

/// Salon list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonListResponse {
    /// List of salons
    pub salons: Vec<SalonInfoDto>,
    /// Total count
    pub total: usize,
}

/// Salon info DTO for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonInfoDto {
    /// Salon ID
    pub salon_id: i64,
    /// Salon name
    pub salon_name: String,
}

impl From<crate::api::SalonInfo> for SalonInfoDto {
    fn from(info: crate::api::SalonInfo) -> Self {
        Self {
            salon_id: info.salon_id.value(),
            salon_name: info.salon_name,
        }
    }
}

/// Query parameters for the timetable endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableQuery {
    /// Target day, `YYYY-MM-DD`.
    pub date: chrono::NaiveDate,
}
