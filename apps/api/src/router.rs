use std::sync::Arc;

use axum::{routing::get, Router};
use tracing::info;

use appointment_cell::router::appointment_routes;
use blog_cell::router::blog_routes;
use contact_cell::router::contact_routes;
use doctor_cell::router::doctor_routes;
use seed_cell::router::seed_routes;
use shared_utils::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let mut api = Router::new()
        .merge(doctor_routes(state.clone()))
        .merge(appointment_routes(state.clone()))
        .merge(blog_routes(state.clone()))
        .merge(contact_routes(state.clone()));

    if state.config.is_production() {
        info!("Production environment, seed routes disabled");
    } else {
        api = api.merge(seed_routes(state.clone()));
    }

    Router::new()
        .route("/", get(|| async { "Clinic API is running!" }))
        .nest("/api", api)
}
