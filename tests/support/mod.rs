// Shared across the integration binaries; not every binary uses every
// helper.
#![allow(dead_code)]

use chrono::NaiveDate;

use salon_rust::api::{AppointmentId, AppointmentKind, AppointmentStatus, SalonId, StaffId};
use salon_rust::db::models::AppointmentRecord;
use salon_rust::db::repositories::LocalRepository;

/// A Monday (day_of_week 1), used as the target day across tests.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// Build an appointment record with string times, the way the storage
/// boundary hands them over. The id is reassigned on insert.
pub fn appointment(staff: i64, name: &str, start: &str, end: &str) -> AppointmentRecord {
    AppointmentRecord {
        appointment_id: AppointmentId::new(0),
        staff_id: StaffId::new(staff),
        staff_name: name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        kind: AppointmentKind::Customer,
        status: AppointmentStatus::Confirmed,
        customer_name: Some("Client".to_string()),
        service_name: Some("Cut".to_string()),
        color_tag: None,
    }
}

/// Fresh repository with one salon and no further configuration.
pub fn repo_with_salon(name: &str) -> (LocalRepository, SalonId) {
    let repo = LocalRepository::new();
    let salon_id = repo.add_salon(name);
    (repo, salon_id)
}
