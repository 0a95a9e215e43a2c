//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Input payload missing required fields or carrying wrong primitive types.
    #[error("{0}")]
    Validation(String),
    /// A by-id operation matched zero rows. Carries the resource name.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Storage engine rejected the operation. The driver message is passed
    /// through verbatim; acceptable at this trust level.
    #[error("Error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_resource_detail() {
        let resp = AppError::NotFound("customer").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::NotFound("customer").to_string(),
            "customer not found"
        );
        // Details use the lowercase resource name for every resource.
        assert_eq!(AppError::NotFound("user").to_string(), "user not found");
    }

    #[test]
    fn validation_and_storage_errors_map_to_400() {
        let resp = AppError::Validation("username is required".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = AppError::Db(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_detail_keeps_driver_message() {
        let msg = AppError::Db(sqlx::Error::PoolClosed).to_string();
        assert!(msg.starts_with("Error: "));
    }
}
