pub mod cors;
pub mod router;

pub use cors::cors_layer;
pub use router::create_router;
