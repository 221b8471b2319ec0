//! High-level service layer over the repository traits.
//!
//! Repository-agnostic operations used by the HTTP handlers: salon
//! listing, health checks, and the timetable build that feeds the grid
//! engine with one (salon, date) pair's data. Degradation policy lives
//! here and in the engine, never in the handlers: malformed rows are
//! excluded and logged, missing configuration falls back to defaults,
//! and only an unknown salon or an unhealthy backend is an error.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::api::{
    Appointment, ExcludedAppointment, ExclusionReason, SalonId, SalonInfo, TimetableData,
};
use crate::db::models::AppointmentRecord;
use crate::db::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::services;

/// Check if the storage backend is healthy.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List all salons for the landing page.
pub async fn list_salons<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<SalonInfo>> {
    let salons = repo.list_salons().await?;
    Ok(salons
        .into_iter()
        .map(|salon| SalonInfo {
            salon_id: salon.salon_id,
            salon_name: salon.name,
        })
        .collect())
}

/// Build the timetable view-model for one (salon, date) pair.
///
/// Runs the full grid pipeline: weekday business-hours resolution, slot
/// generation, staff column resolution, placement and assembly. Errors
/// only for an unknown salon or a repository failure; every data-quality
/// problem degrades into `excluded` entries instead.
pub async fn build_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    salon_id: SalonId,
    date: NaiveDate,
) -> RepositoryResult<TimetableData> {
    if repo.get_salon(salon_id).await?.is_none() {
        return Err(RepositoryError::not_found_with_context(
            format!("salon {} does not exist", salon_id),
            ErrorContext::new("build_timetable")
                .with_entity("salon")
                .with_entity_id(salon_id),
        ));
    }

    let day_of_week = date.weekday().num_days_from_sunday() as u8;
    let hours_record = repo.get_business_hours(salon_id, day_of_week).await?;
    let interval_minutes = repo.get_slot_interval(salon_id).await?;
    let records = repo.list_appointments(salon_id, date).await?;

    let mut excluded: Vec<ExcludedAppointment> = Vec::new();
    let appointments = parse_appointments(salon_id, records, &mut excluded);

    // A business-hours row with unparsable times counts as absent: the
    // resolver degrades to defaults rather than failing the page.
    let hours = hours_record.and_then(|record| match record.to_business_hours() {
        Ok(hours) => Some(hours),
        Err(err) => {
            warn!(
                %salon_id,
                day_of_week,
                error = %err,
                "business-hours record unparsable, using defaults"
            );
            None
        }
    });

    let config = services::resolve_business_hours(hours, interval_minutes);
    let rows = services::generate_slots(&config);
    let columns = services::resolve_columns(&appointments);
    let report = services::place_appointments(&appointments, &columns, &rows, config.interval_minutes);

    for appointment_id in &report.unknown_staff {
        excluded.push(ExcludedAppointment {
            appointment_id: *appointment_id,
            reason: ExclusionReason::UnknownStaff,
        });
    }
    for appointment_id in &report.unmatched_start {
        warn!(
            %salon_id,
            %date,
            %appointment_id,
            "appointment start aligns with no grid row, dropping from grid"
        );
        excluded.push(ExcludedAppointment {
            appointment_id: *appointment_id,
            reason: ExclusionReason::UnmatchedStartTime,
        });
    }

    let blocks = report.blocks;
    let grid = services::assemble(columns, rows, blocks).into_grid();
    let fingerprint = grid.as_ref().map(services::grid_fingerprint);

    Ok(TimetableData {
        salon_id,
        date,
        config,
        no_working_staff: grid.is_none(),
        grid,
        fingerprint,
        excluded,
    })
}

fn parse_appointments(
    salon_id: SalonId,
    records: Vec<AppointmentRecord>,
    excluded: &mut Vec<ExcludedAppointment>,
) -> Vec<Appointment> {
    let mut appointments = Vec::with_capacity(records.len());
    for record in records {
        match record.to_appointment() {
            Ok(appointment) => appointments.push(appointment),
            Err(err) => {
                warn!(
                    %salon_id,
                    appointment_id = %record.appointment_id,
                    error = %err,
                    "appointment has malformed time, excluding from grid"
                );
                excluded.push(ExcludedAppointment {
                    appointment_id: record.appointment_id,
                    reason: ExclusionReason::InvalidTime,
                });
            }
        }
    }
    appointments
}
