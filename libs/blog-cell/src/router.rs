use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_utils::AppState;

use crate::handlers;

pub fn blog_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/posts", get(handlers::list_posts))
        // One parameter name per segment: a slug for reads, an id for comments.
        .route("/posts/{post}", get(handlers::get_post))
        .route("/posts/{post}/comments", post(handlers::create_comment))
        .with_state(state)
}
