//! Resource CRUD handlers: create, list, read, update, delete.
//!
//! Each handler is generic over the resource; the router instantiates one
//! set per resource. Validation runs before any storage access.

use crate::error::AppError;
use crate::response;
use crate::schema::Resource;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

/// Unwrap the body extraction so malformed JSON comes back in the same
/// `{"detail": ...}` shape as every other client error.
fn extract_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(body)
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let record = R::from_body(extract_body(body)?)?;
    CrudService::create(&state.pool, &record).await?;
    Ok(response::created(format!("{} created successfully", R::NAME)))
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = CrudService::list::<R>(&state.pool).await?;
    Ok(response::ok_many(format!("All {} retrieved", R::NAME), rows))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let row = CrudService::get::<R>(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(R::NAME))?;
    Ok(response::ok_one(
        format!("{} retrieved successfully", R::NAME),
        row,
    ))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let record = R::from_body(extract_body(body)?)?;
    // Blind write; the affected-row count is the existence check.
    let affected = CrudService::update(&state.pool, id, &record).await?;
    if affected == 0 {
        return Err(AppError::NotFound(R::NAME));
    }
    Ok(response::ok_action(format!("{} updated successfully", R::NAME)))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let affected = CrudService::delete::<R>(&state.pool, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound(R::NAME));
    }
    Ok(response::ok_action(format!("{} deleted successfully", R::NAME)))
}
