use std::sync::Arc;

use axum::{routing::post, Router};

use shared_utils::AppState;

use crate::handlers;

/// Destructive routes. Only mount outside production.
pub fn seed_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/seed/doctors", post(handlers::seed_doctors))
        .route("/seed/services", post(handlers::seed_services))
        .route("/seed/posts", post(handlers::seed_posts))
        .with_state(state)
}
