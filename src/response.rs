//! Standard response envelope helpers.
//!
//! Every successful handler result is wrapped in the same
//! `{status, message, data}` shape; `data` is omitted entirely (not null)
//! for pure-action responses.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 201 with a message and no payload (create).
pub fn created(message: String) -> (StatusCode, Json<ApiResponse<Value>>) {
    (
        StatusCode::CREATED,
        Json(ApiResponse {
            status: "success",
            message,
            data: None,
        }),
    )
}

/// 200 with a message and no payload (update, delete).
pub fn ok_action(message: String) -> (StatusCode, Json<ApiResponse<Value>>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            status: "success",
            message,
            data: None,
        }),
    )
}

/// 200 with a single record payload (get-by-id).
pub fn ok_one(message: String, data: Value) -> (StatusCode, Json<ApiResponse<Value>>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            status: "success",
            message,
            data: Some(data),
        }),
    )
}

/// 200 with the full row sequence (list).
pub fn ok_many(message: String, data: Vec<Value>) -> (StatusCode, Json<ApiResponse<Vec<Value>>>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            status: "success",
            message,
            data: Some(data),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_envelope_omits_data_key() {
        let (_, Json(body)) = created("user created successfully".into());
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["message"], "user created successfully");
        assert!(v.as_object().unwrap().get("data").is_none());
    }

    #[test]
    fn one_envelope_carries_record() {
        let (_, Json(body)) = ok_one(
            "user retrieved successfully".into(),
            serde_json::json!({"id": 1}),
        );
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["data"]["id"], 1);
    }

    #[test]
    fn many_envelope_keeps_order() {
        let rows = vec![serde_json::json!({"id": 1}), serde_json::json!({"id": 2})];
        let (_, Json(body)) = ok_many("All user retrieved".into(), rows);
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["data"][0]["id"], 1);
        assert_eq!(v["data"][1]["id"], 2);
    }
}
