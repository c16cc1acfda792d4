//! Shared HTTP types: the response envelope and domain error mapping

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response wrapper
///
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) | DomainError::InvalidOverride { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for (StatusCode, Json<ApiResponse<()>>) {
    fn from(err: DomainError) -> Self {
        let status = status_for(&err);
        if status.is_server_error() {
            error!("Request failed: {}", err);
        }
        (status, Json(ApiResponse::error(err.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (DomainError::not_found("Fare", "id", 1), StatusCode::NOT_FOUND),
            (
                DomainError::invalid_override("price", "bad"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::Validation("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::Conflict("Y".into()), StatusCode::CONFLICT),
            (
                DomainError::Storage("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let (status, Json(body)): ApiError = err.into();
            assert_eq!(status, expected);
            assert!(!body.success);
            assert!(body.error.is_some());
        }
    }
}
