//! In-memory local repository implementation.
//!
//! Stores everything in memory behind a `parking_lot::RwLock`, giving
//! fast, deterministic and isolated execution for unit tests and local
//! development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::api::{AppointmentId, SalonId};
use crate::db::models::{AppointmentRecord, BusinessHoursRecord, SalonRecord};
use crate::db::repository::{
    AppointmentRepository, RepositoryError, RepositoryResult, SalonRepository,
};

/// In-memory local repository.
///
/// Cloning is cheap and clones share the same underlying data.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    salons: HashMap<SalonId, SalonRecord>,
    business_hours: HashMap<(SalonId, u8), BusinessHoursRecord>,
    slot_intervals: HashMap<SalonId, u32>,
    appointments: HashMap<(SalonId, NaiveDate), Vec<AppointmentRecord>>,
    next_salon_id: i64,
    next_appointment_id: i64,
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        let repo = Self::default();
        repo.data.write().is_healthy = true;
        repo.data.write().next_salon_id = 1;
        repo.data.write().next_appointment_id = 1;
        repo
    }

    /// Add a salon and return its assigned id.
    pub fn add_salon(&self, name: impl Into<String>) -> SalonId {
        let mut data = self.data.write();
        let salon_id = SalonId::new(data.next_salon_id);
        data.next_salon_id += 1;
        data.salons.insert(
            salon_id,
            SalonRecord {
                salon_id,
                name: name.into(),
            },
        );
        salon_id
    }

    /// Set the business-hours record for one (salon, day-of-week) pair,
    /// replacing any previous record for that pair.
    pub fn set_business_hours(&self, salon_id: SalonId, record: BusinessHoursRecord) {
        let mut data = self.data.write();
        data.business_hours
            .insert((salon_id, record.day_of_week), record);
    }

    /// Set the per-salon slot interval in minutes.
    pub fn set_slot_interval(&self, salon_id: SalonId, interval_minutes: u32) {
        self.data
            .write()
            .slot_intervals
            .insert(salon_id, interval_minutes);
    }

    /// Add an appointment for a (salon, date) pair. The record's id is
    /// overwritten with a freshly assigned one, which is returned.
    pub fn add_appointment(
        &self,
        salon_id: SalonId,
        date: NaiveDate,
        mut record: AppointmentRecord,
    ) -> AppointmentId {
        let mut data = self.data.write();
        let appointment_id = AppointmentId::new(data.next_appointment_id);
        data.next_appointment_id += 1;
        record.appointment_id = appointment_id;
        data.appointments
            .entry((salon_id, date))
            .or_default()
            .push(record);
        appointment_id
    }

    /// Load a parsed agenda: adds the salon, its weekly hours, interval
    /// and appointments. Returns the new salon's id.
    pub fn load_agenda(&self, agenda: crate::models::Agenda) -> SalonId {
        let salon_id = self.add_salon(agenda.salon);
        for hours in agenda.business_hours {
            self.set_business_hours(salon_id, hours);
        }
        if let Some(interval) = agenda.slot_interval_minutes {
            self.set_slot_interval(salon_id, interval);
        }
        for (date, records) in agenda.appointments {
            for record in records {
                self.add_appointment(salon_id, date, record);
            }
        }
        salon_id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let healthy = data.is_healthy;
        *data = LocalData {
            is_healthy: healthy,
            next_salon_id: 1,
            next_appointment_id: 1,
            ..Default::default()
        };
    }

    /// Number of salons stored.
    pub fn salon_count(&self) -> usize {
        self.data.read().salons.len()
    }

    fn ensure_healthy(&self) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection("local repository marked down"))
        }
    }
}

#[async_trait]
impl SalonRepository for LocalRepository {
    async fn list_salons(&self) -> RepositoryResult<Vec<SalonRecord>> {
        self.ensure_healthy()?;
        let mut salons: Vec<SalonRecord> = self.data.read().salons.values().cloned().collect();
        salons.sort_by_key(|salon| salon.salon_id);
        Ok(salons)
    }

    async fn get_salon(&self, salon_id: SalonId) -> RepositoryResult<Option<SalonRecord>> {
        self.ensure_healthy()?;
        Ok(self.data.read().salons.get(&salon_id).cloned())
    }

    async fn get_business_hours(
        &self,
        salon_id: SalonId,
        day_of_week: u8,
    ) -> RepositoryResult<Option<BusinessHoursRecord>> {
        self.ensure_healthy()?;
        Ok(self
            .data
            .read()
            .business_hours
            .get(&(salon_id, day_of_week))
            .cloned())
    }

    async fn get_slot_interval(&self, salon_id: SalonId) -> RepositoryResult<Option<u32>> {
        self.ensure_healthy()?;
        Ok(self.data.read().slot_intervals.get(&salon_id).copied())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }
}

#[async_trait]
impl AppointmentRepository for LocalRepository {
    async fn list_appointments(
        &self,
        salon_id: SalonId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<AppointmentRecord>> {
        self.ensure_healthy()?;
        Ok(self
            .data
            .read()
            .appointments
            .get(&(salon_id, date))
            .cloned()
            .unwrap_or_default())
    }
}
