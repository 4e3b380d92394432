use std::sync::Arc;

use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/services", get(handlers::list_services))
        .with_state(state)
}
