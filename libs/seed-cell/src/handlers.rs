use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use blog_cell::models::Post;
use doctor_cell::models::{Doctor, Service};
use shared_models::error::AppError;
use shared_utils::AppState;

use crate::services::SeedService;

#[axum::debug_handler]
pub async fn seed_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<Doctor>>), AppError> {
    let seeder = SeedService::new(&state.supabase);

    let doctors = seeder.seed_doctors().await?;

    Ok((StatusCode::CREATED, Json(doctors)))
}

#[axum::debug_handler]
pub async fn seed_services(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<Service>>), AppError> {
    let seeder = SeedService::new(&state.supabase);

    let services = seeder.seed_services().await?;

    Ok((StatusCode::CREATED, Json(services)))
}

#[axum::debug_handler]
pub async fn seed_posts(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<Post>>), AppError> {
    let seeder = SeedService::new(&state.supabase);

    let posts = seeder.seed_posts().await?;

    Ok((StatusCode::CREATED, Json(posts)))
}
