//! Error-to-status mapping for the REST API
//!
//! Translates `DomainError` into transport-level responses. The error body
//! surfaced to callers is `{"message": ..., "statusCode": ..., "timestamp": ...}`
//! with an ISO8601 timestamp.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// JSON error body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: status.as_u16(),
            timestamp: Utc::now(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match err {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Duplicate(_) => StatusCode::CONFLICT,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(DomainError::NotFound("customer id [1] not found!".into()));
        assert_eq!(err.status_code, 404);
        assert_eq!(err.message, "customer id [1] not found!");
    }

    #[test]
    fn duplicate_maps_to_409() {
        let err = ApiError::from(DomainError::Duplicate("Email already taken!".into()));
        assert_eq!(err.status_code, 409);
        assert_eq!(err.message, "Email already taken!");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::from(DomainError::Validation(
            "Request does not contain any changes!".into(),
        ));
        assert_eq!(err.status_code, 400);
    }

    #[test]
    fn storage_maps_to_500() {
        let err = ApiError::from(DomainError::Storage("connection lost".into()));
        assert_eq!(err.status_code, 500);
    }

    #[test]
    fn body_uses_the_documented_field_names() {
        let err = ApiError::new(StatusCode::NOT_FOUND, "nope");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["message"], "nope");
        assert_eq!(value["statusCode"], 404);
        assert!(value["timestamp"].is_string());
    }
}
