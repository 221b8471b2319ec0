//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{HealthResponse, SalonInfoDto, SalonListResponse, TimetableQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{SalonId, TimetableData};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the storage
/// backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Salons
// =============================================================================

/// GET /v1/salons
///
/// List all salons for the landing page.
pub async fn list_salons(State(state): State<AppState>) -> HandlerResult<SalonListResponse> {
    let salons = db_services::list_salons(state.repository.as_ref()).await?;

    let salon_dtos: Vec<SalonInfoDto> = salons.into_iter().map(Into::into).collect();
    let total = salon_dtos.len();

    Ok(Json(SalonListResponse {
        salons: salon_dtos,
        total,
    }))
}

// =============================================================================
// Timetable
// =============================================================================

/// GET /v1/salons/{salon_id}/timetable?date=YYYY-MM-DD
///
/// Build the timetable grid for one salon and day. A malformed `date`
/// rejects with 400 before the handler runs; an unknown salon maps to 404.
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(salon_id): Path<i64>,
    Query(query): Query<TimetableQuery>,
) -> HandlerResult<TimetableData> {
    // Ids are assigned from 1; anything below never names a salon.
    if salon_id < 1 {
        return Err(AppError::BadRequest(format!(
            "salon id must be positive, got {}",
            salon_id
        )));
    }
    let salon_id = SalonId::new(salon_id);
    let data =
        db_services::build_timetable(state.repository.as_ref(), salon_id, query.date).await?;
    Ok(Json(data))
}
