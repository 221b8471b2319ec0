//! Repository trait definitions for storage operations.
//!
//! The engine never talks to a database directly; everything it needs is
//! expressed as these trait contracts, so storage backends can be swapped
//! without touching the grid pipeline.
//!
//! - [`error`]: Error types for repository operations
//! - [`SalonRepository`]: salon listing, business hours and settings
//! - [`AppointmentRepository`]: the day's appointments for one salon
//! - [`FullRepository`]: convenience bound combining both

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::SalonId;
use crate::db::models::{AppointmentRecord, BusinessHoursRecord, SalonRecord};

/// Salon-scoped configuration reads.
#[async_trait]
pub trait SalonRepository: Send + Sync {
    /// All salons, for the landing listing.
    async fn list_salons(&self) -> RepositoryResult<Vec<SalonRecord>>;

    /// One salon, or `None` when the id is unknown.
    async fn get_salon(&self, salon_id: SalonId) -> RepositoryResult<Option<SalonRecord>>;

    /// Business-hours record for a (salon, day-of-week) pair; `None` when
    /// not configured. `day_of_week`: 0 = Sunday .. 6 = Saturday.
    async fn get_business_hours(
        &self,
        salon_id: SalonId,
        day_of_week: u8,
    ) -> RepositoryResult<Option<BusinessHoursRecord>>;

    /// Per-salon slot interval in minutes; `None` when not configured.
    /// Not tied to day-of-week.
    async fn get_slot_interval(&self, salon_id: SalonId) -> RepositoryResult<Option<u32>>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Appointment reads for the grid.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// The day's appointments for one salon, times as `HH:MM:SS` strings.
    async fn list_appointments(
        &self,
        salon_id: SalonId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<AppointmentRecord>>;
}

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: SalonRepository + AppointmentRepository {}

// Blanket implementation: any type implementing both traits automatically
// implements FullRepository
impl<T> FullRepository for T where T: SalonRepository + AppointmentRepository {}
