// ============================================================================
// Agenda seed parsing
// ============================================================================
//
// File-based and string-based parsing of one salon's agenda: the salon
// name, optional weekly business hours, an optional slot interval and
// the appointment rows per date. Used to seed the in-memory repository
// for local development and demos.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::api::{AppointmentId, AppointmentKind, AppointmentStatus, StaffId};
use crate::db::models::{AppointmentRecord, BusinessHoursRecord};

/// Parsed agenda seed for one salon.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Agenda {
    pub salon: String,
    #[serde(default)]
    pub business_hours: Vec<BusinessHoursRecord>,
    #[serde(default)]
    pub slot_interval_minutes: Option<u32>,
    /// Appointment rows keyed by ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub appointments: HashMap<NaiveDate, Vec<AppointmentRecord>>,
}

fn validate_agenda(agenda: &Agenda) -> Result<()> {
    if agenda.salon.trim().is_empty() {
        anyhow::bail!("Missing required 'salon' name");
    }
    for hours in &agenda.business_hours {
        if hours.day_of_week > 6 {
            anyhow::bail!(
                "business_hours day_of_week {} out of range 0..=6",
                hours.day_of_week
            );
        }
    }
    if agenda.slot_interval_minutes == Some(0) {
        anyhow::bail!("slot_interval_minutes must be positive when set");
    }
    Ok(())
}

/// Parse an agenda seed from a JSON string.
pub fn parse_agenda_json_str(agenda_json: &str) -> Result<Agenda> {
    let agenda: Agenda =
        serde_json::from_str(agenda_json).context("Failed to deserialize agenda JSON")?;
    validate_agenda(&agenda)?;
    Ok(agenda)
}

/// Parse an agenda seed from a JSON file.
pub fn parse_agenda_json_file(path: impl AsRef<std::path::Path>) -> Result<Agenda> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read agenda file {}", path.display()))?;
    parse_agenda_json_str(&contents)
}

/// Built-in agenda used when no seed file is supplied: one salon, open
/// every day, with a handful of appointments on the current day so a
/// fresh local server serves a populated grid.
pub fn demo_agenda() -> Agenda {
    let today = chrono::Local::now().date_naive();

    let business_hours = (0u8..7)
        .map(|day_of_week| BusinessHoursRecord {
            day_of_week,
            open_time: "09:00:00".to_string(),
            close_time: "19:00:00".to_string(),
            is_closed: false,
        })
        .collect();

    let booking = |id: i64, staff: i64, staff_name: &str, start: &str, end: &str,
                   customer: &str, service: &str| AppointmentRecord {
        appointment_id: AppointmentId::new(id),
        staff_id: StaffId::new(staff),
        staff_name: staff_name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        kind: AppointmentKind::Customer,
        status: AppointmentStatus::Confirmed,
        customer_name: Some(customer.to_string()),
        service_name: Some(service.to_string()),
        color_tag: None,
    };

    let mut lunch = booking(5, 1, "Anna", "12:00:00", "12:30:00", "", "");
    lunch.kind = AppointmentKind::Break;
    lunch.status = AppointmentStatus::Reserved;
    lunch.customer_name = None;
    lunch.service_name = None;

    let mut appointments = HashMap::new();
    appointments.insert(
        today,
        vec![
            booking(1, 1, "Anna", "09:00:00", "10:00:00", "Mrs. Kato", "Cut"),
            booking(2, 1, "Anna", "10:30:00", "11:30:00", "Mr. Fels", "Color"),
            booking(3, 2, "Bea", "10:00:00", "10:30:00", "Ms. Ito", "Blowout"),
            booking(4, 2, "Bea", "13:00:00", "14:30:00", "Mrs. Han", "Perm"),
            lunch,
        ],
    );

    Agenda {
        salon: "Demo Salon".to_string(),
        business_hours,
        slot_interval_minutes: Some(30),
        appointments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_agenda() {
        let agenda_json = r#"{ "salon": "Studio North" }"#;
        let agenda = parse_agenda_json_str(agenda_json).unwrap();
        assert_eq!(agenda.salon, "Studio North");
        assert!(agenda.business_hours.is_empty());
        assert!(agenda.slot_interval_minutes.is_none());
        assert!(agenda.appointments.is_empty());
    }

    #[test]
    fn test_parse_full_agenda() {
        let agenda_json = r#"{
            "salon": "Studio North",
            "business_hours": [
                { "day_of_week": 1, "open_time": "10:00:00", "close_time": "18:00:00" },
                { "day_of_week": 0, "open_time": "00:00:00", "close_time": "00:00:00", "is_closed": true }
            ],
            "slot_interval_minutes": 15,
            "appointments": {
                "2025-03-10": [
                    {
                        "appointment_id": 1,
                        "staff_id": 10,
                        "staff_name": "Anna",
                        "start_time": "10:00:00",
                        "end_time": "10:45:00",
                        "kind": "customer",
                        "status": "confirmed",
                        "customer_name": "Client"
                    }
                ]
            }
        }"#;

        let agenda = parse_agenda_json_str(agenda_json).unwrap();
        assert_eq!(agenda.business_hours.len(), 2);
        assert_eq!(agenda.slot_interval_minutes, Some(15));
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(agenda.appointments[&date].len(), 1);
        assert_eq!(agenda.appointments[&date][0].staff_name, "Anna");
    }

    #[test]
    fn test_missing_salon_name() {
        let agenda_json = r#"{ "salon": "  " }"#;
        assert!(parse_agenda_json_str(agenda_json).is_err());
    }

    #[test]
    fn test_rejects_bad_day_of_week() {
        let agenda_json = r#"{
            "salon": "Studio",
            "business_hours": [
                { "day_of_week": 7, "open_time": "09:00:00", "close_time": "19:00:00" }
            ]
        }"#;
        assert!(parse_agenda_json_str(agenda_json).is_err());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let agenda_json = r#"{ "salon": "Studio", "slot_interval_minutes": 0 }"#;
        assert!(parse_agenda_json_str(agenda_json).is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_agenda_json_str("not valid json {").is_err());
    }

    #[test]
    fn test_demo_agenda_is_valid_and_populated() {
        let agenda = demo_agenda();
        validate_agenda(&agenda).unwrap();

        let today = chrono::Local::now().date_naive();
        let records = &agenda.appointments[&today];
        assert!(!records.is_empty());
        // Every demo record must survive the repository-boundary parse.
        for record in records {
            record.to_appointment().unwrap();
        }
        for hours in &agenda.business_hours {
            hours.to_business_hours().unwrap();
        }
    }
}
