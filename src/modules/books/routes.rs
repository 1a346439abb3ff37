use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use smarthomie_http::error::AppError;

use super::store::BookStore;

/// Routes served by the books module
pub fn router(store: BookStore) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .with_state(store)
}

/// List every stored record in insertion order
async fn list_books(State(store): State<BookStore>) -> Json<Vec<Value>> {
    Json(store.list().await)
}

/// Append the posted JSON verbatim; the payload is not checked against the schema
async fn add_book(
    State(store): State<BookStore>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(record) = payload?;
    let count = store.append(record).await;
    tracing::debug!(module = "books", count, "book record appended");
    Ok(StatusCode::NO_CONTENT)
}
