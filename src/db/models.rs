//! Raw records as the storage layer hands them over.
//!
//! Times are `HH:MM[:SS]` strings at this boundary, matching what a
//! relational row or remote call carries; conversion into the typed
//! minute-granularity model happens here, per record, so one malformed
//! row never poisons the rest of a day.

use serde::{Deserialize, Serialize};

use crate::api::{
    Appointment, AppointmentId, AppointmentKind, AppointmentStatus, BusinessHours, DisplayFields,
    InvalidTimeFormat, SalonId, StaffId, TimeOfDay,
};

/// One salon (tenant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalonRecord {
    pub salon_id: SalonId,
    pub name: String,
}

/// Business-hours row for one (salon, day-of-week) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHoursRecord {
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    pub open_time: String,
    pub close_time: String,
    #[serde(default)]
    pub is_closed: bool,
}

impl BusinessHoursRecord {
    /// Parse the string times into the typed view.
    pub fn to_business_hours(&self) -> Result<BusinessHours, InvalidTimeFormat> {
        Ok(BusinessHours {
            day_of_week: self.day_of_week,
            open: TimeOfDay::parse(&self.open_time)?,
            close: TimeOfDay::parse(&self.close_time)?,
            is_closed: self.is_closed,
        })
    }
}

/// Appointment row for the target day. Customer/staff/service names are
/// already resolved by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub appointment_id: AppointmentId,
    pub staff_id: StaffId,
    pub staff_name: String,
    /// `HH:MM:SS` (seconds are truncated on conversion).
    pub start_time: String,
    pub end_time: String,
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_tag: Option<String>,
}

impl AppointmentRecord {
    /// Parse the string times into a typed `Appointment`.
    ///
    /// Fails fast with `InvalidTimeFormat` for this record only; the
    /// caller excludes it and keeps building the grid.
    pub fn to_appointment(&self) -> Result<Appointment, InvalidTimeFormat> {
        Ok(Appointment {
            id: self.appointment_id,
            staff_id: self.staff_id,
            start: TimeOfDay::parse(&self.start_time)?,
            end: TimeOfDay::parse(&self.end_time)?,
            kind: self.kind,
            status: self.status,
            display: DisplayFields {
                staff_name: self.staff_name.clone(),
                customer_name: self.customer_name.clone(),
                service_name: self.service_name.clone(),
                color_tag: self.color_tag.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: &str, end: &str) -> AppointmentRecord {
        AppointmentRecord {
            appointment_id: AppointmentId::new(1),
            staff_id: StaffId::new(10),
            staff_name: "Anna".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            kind: AppointmentKind::Customer,
            status: AppointmentStatus::Reserved,
            customer_name: None,
            service_name: None,
            color_tag: None,
        }
    }

    #[test]
    fn test_appointment_conversion_truncates_seconds() {
        let appointment = record("09:00:00", "10:15:30").to_appointment().unwrap();
        assert_eq!(appointment.start.to_string(), "09:00");
        assert_eq!(appointment.end.to_string(), "10:15");
    }

    #[test]
    fn test_appointment_conversion_rejects_bad_times() {
        let err = record("9am", "10:00:00").to_appointment().unwrap_err();
        assert_eq!(err.input, "9am");
    }

    #[test]
    fn test_business_hours_conversion() {
        let record = BusinessHoursRecord {
            day_of_week: 1,
            open_time: "10:00".to_string(),
            close_time: "20:00".to_string(),
            is_closed: false,
        };
        let hours = record.to_business_hours().unwrap();
        assert_eq!(hours.open.to_string(), "10:00");
        assert_eq!(hours.close.to_string(), "20:00");
        assert!(!hours.is_closed);
    }
}
