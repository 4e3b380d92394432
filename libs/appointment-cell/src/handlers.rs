// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use shared_models::error::AppError;
use shared_utils::{AppState, ValidatedJson};

use crate::models::{
    Appointment, AppointmentFilters, AppointmentSearchQuery, BookAppointmentRequest,
    UpdateStatusRequest,
};
use crate::services::booking::AppointmentBookingService;

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let booking_service = AppointmentBookingService::new(&state.supabase);

    let appointment = booking_service.book_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn search_appointments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AppointmentSearchQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let booking_service = AppointmentBookingService::new(&state.supabase);

    let filters = AppointmentFilters::from(query);
    let appointments = booking_service.list_appointments(&filters).await?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let booking_service = AppointmentBookingService::new(&state.supabase);

    let appointment = booking_service.get_appointment(&appointment_id).await?;

    Ok(Json(appointment))
}

/// PUT and PATCH /appointments/{id}/status
#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    let booking_service = AppointmentBookingService::new(&state.supabase);

    let appointment = booking_service
        .update_status(&appointment_id, &request.status)
        .await?;

    Ok(Json(appointment))
}
