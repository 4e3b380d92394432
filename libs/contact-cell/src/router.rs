use std::sync::Arc;

use axum::{routing::post, Router};

use shared_utils::AppState;

use crate::handlers;

pub fn contact_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/contact", post(handlers::create_contact_message))
        .with_state(state)
}
