//! Consistent JSON error responses.
//!
//! Every error body has the single shape `{"error": "<message>"}`.
//! Status mapping:
//! - validation failure → 400 (detected before any store call)
//! - change count 0 on update/delete → 404 (interpolating the requested id)
//! - store failure → 500 with the underlying message, single attempt,
//!   fail-fast, no retry

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopstock_db::DbError;

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

/// Maps a store failure to a server error response.
///
/// The store never swallows errors, and the API layer never lets one crash
/// the process: the failing request gets its 500 and everything else keeps
/// running.
pub fn db_error_to_response(err: DbError) -> axum::response::Response {
    tracing::error!(error = %err, "Store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// The 404 body for update/delete against an id with no row.
pub fn product_not_found(id: i64) -> axum::response::Response {
    json_error(
        StatusCode::NOT_FOUND,
        format!("No product found with id {id}"),
    )
}
