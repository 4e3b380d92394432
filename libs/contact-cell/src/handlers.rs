use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use shared_models::error::AppError;
use shared_utils::{AppState, ValidatedJson};

use crate::models::{ContactMessage, CreateContactRequest};
use crate::services::ContactIntakeService;

#[axum::debug_handler]
pub async fn create_contact_message(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    let intake = ContactIntakeService::new(&state.supabase);

    let message = intake.submit(request).await?;

    Ok((StatusCode::CREATED, Json(message)))
}
