use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .nest("/products", products::router())
}
