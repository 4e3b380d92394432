use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::models::{Doctor, DoctorFilters, DoctorSearchQuery, Service};
use crate::services::{CatalogService, DoctorService};

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    let doctor_service = DoctorService::new(&state.supabase);

    let filters = DoctorFilters::from(query);
    let doctors = doctor_service.list_doctors(&filters).await?;

    Ok(Json(doctors))
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let catalog = CatalogService::new(&state.supabase);

    let services = catalog.list_services().await?;

    Ok(Json(services))
}
