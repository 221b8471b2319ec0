use super::*;

fn sample_appointment() -> Appointment {
    Appointment {
        id: AppointmentId::new(1),
        staff_id: StaffId::new(10),
        start: TimeOfDay::parse("09:00").unwrap(),
        end: TimeOfDay::parse("10:00").unwrap(),
        kind: AppointmentKind::Customer,
        status: AppointmentStatus::Confirmed,
        display: DisplayFields {
            staff_name: "Anna".to_string(),
            customer_name: Some("Mrs. Kato".to_string()),
            service_name: Some("Cut".to_string()),
            color_tag: None,
        },
    }
}

#[test]
fn test_id_newtypes() {
    assert_eq!(SalonId::new(3).value(), 3);
    assert_eq!(StaffId::new(4).value(), 4);
    assert_eq!(AppointmentId::new(5).value(), 5);
    assert_eq!(SalonId::new(3).to_string(), "3");
    let raw: i64 = SalonId::new(7).into();
    assert_eq!(raw, 7);
}

#[test]
fn test_status_tag_mapping() {
    assert_eq!(AppointmentStatus::Reserved.status_tag(), None);
    assert_eq!(
        AppointmentStatus::Confirmed.status_tag(),
        Some(StatusTag::Confirmed)
    );
    assert_eq!(
        AppointmentStatus::Cancelled.status_tag(),
        Some(StatusTag::Cancelled)
    );
    assert_eq!(
        AppointmentStatus::NoShow.status_tag(),
        Some(StatusTag::NoShow)
    );
}

#[test]
fn test_kind_serialization_snake_case() {
    assert_eq!(
        serde_json::to_string(&AppointmentKind::Customer).unwrap(),
        "\"customer\""
    );
    assert_eq!(
        serde_json::to_string(&AppointmentStatus::NoShow).unwrap(),
        "\"no_show\""
    );
}

#[test]
fn test_appointment_round_trip() {
    let appointment = sample_appointment();
    let json = serde_json::to_string(&appointment).unwrap();
    let back: Appointment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, appointment);
}

#[test]
fn test_display_fields_skip_absent_options() {
    let display = DisplayFields {
        staff_name: "Bea".to_string(),
        customer_name: None,
        service_name: None,
        color_tag: None,
    };
    let json = serde_json::to_string(&display).unwrap();
    assert_eq!(json, "{\"staff_name\":\"Bea\"}");
}

#[test]
fn test_time_slot_config_serializes_display_times() {
    let config = TimeSlotConfig {
        open: TimeOfDay::parse("09:00").unwrap(),
        close: TimeOfDay::parse("19:00").unwrap(),
        interval_minutes: 30,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"09:00\""));
    assert!(json.contains("\"19:00\""));
}
