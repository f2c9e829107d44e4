use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use super::handlers::*;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/position", get(get_position))
        .route("/api/search", get(search))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
}
