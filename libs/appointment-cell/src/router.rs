// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use shared_utils::AppState;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(handlers::search_appointments).post(handlers::book_appointment),
        )
        .route("/appointments/{appointment_id}", get(handlers::get_appointment))
        .route(
            "/appointments/{appointment_id}/status",
            put(handlers::update_appointment_status).patch(handlers::update_appointment_status),
        )
        .with_state(state)
}
