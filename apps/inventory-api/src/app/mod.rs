//! HTTP API application wiring (Axum router + store handle).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses
//!
//! Per-request lifecycle: Received → Validated → Executed → Responded.
//! Validation failures short-circuit straight to Responded without touching
//! the store; a store failure answers that one request with a server error
//! and never affects other in-flight requests.

use axum::{Extension, Router};

use shopstock_db::Database;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The `Database` handle is opened once by the caller and shared by every
/// in-flight request; cloning it only clones the pool reference.
pub fn build_app(db: Database) -> Router {
    routes::router().layer(Extension(db))
}
