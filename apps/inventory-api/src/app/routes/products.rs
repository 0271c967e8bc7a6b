//! Product CRUD handlers.
//!
//! Each handler follows the same shape: validate the inbound payload (a 400
//! short-circuits before the store is touched), execute exactly one store
//! call, then map the result. Mutations rely on the store's change-count
//! contract: `Ok(0)` means the id matched nothing and becomes a 404, `Ok(1)`
//! becomes a success body, `Err` becomes a 500.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use shopstock_db::Database;

use crate::app::dto::{ProductPayload, MISSING_FIELDS};
use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
}

pub async fn list_products(Extension(db): Extension<Database>) -> axum::response::Response {
    match db.products().list_all().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::db_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(db): Extension<Database>,
    Json(body): Json<ProductPayload>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(None) => return errors::json_error(StatusCode::BAD_REQUEST, MISSING_FIELDS),
        Err(Some(e)) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match db.products().insert(&draft).await {
        Ok(id) => (StatusCode::CREATED, Json(draft.into_product(id))).into_response(),
        Err(e) => errors::db_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
    Json(body): Json<ProductPayload>,
) -> axum::response::Response {
    let id: i64 = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid product id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(None) => return errors::json_error(StatusCode::BAD_REQUEST, MISSING_FIELDS),
        Err(Some(e)) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match db.products().update(id, &draft).await {
        Ok(0) => errors::product_not_found(id),
        Ok(changes) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Product updated successfully",
                "changes": changes,
            })),
        )
            .into_response(),
        Err(e) => errors::db_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: i64 = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid product id"),
    };

    match db.products().delete(id).await {
        Ok(0) => errors::product_not_found(id),
        Ok(changes) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Product deleted successfully",
                "changes": changes,
            })),
        )
            .into_response(),
        Err(e) => errors::db_error_to_response(e),
    }
}
