use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Trail metrics rejected before they reach the difficulty engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid {field}: unrecognized value {value:?}")]
    InvalidEnum { field: &'static str, value: String },

    #[error("Invalid {field}: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Trail {0} not found")]
    NotFound(Uuid),

    #[error("Trail {0} already exists")]
    Conflict(Uuid),

    #[error("Trail {0} is older than every entry the history keeps")]
    Evicted(Uuid),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Input(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Store(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Store(StoreError::Conflict(_) | StoreError::Evicted(_)) => {
                (StatusCode::CONFLICT, self.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::from(InputError::InvalidEnum {
                    field: "terrain",
                    value: "lava".to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(StoreError::NotFound(Uuid::nil())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(StoreError::Conflict(Uuid::nil())),
                StatusCode::CONFLICT,
            ),
            (
                AppError::from(StoreError::Evicted(Uuid::nil())),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_input_error_message() {
        let err = InputError::OutOfRange {
            field: "distance",
            reason: "must not be negative, got -2".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid distance: must not be negative, got -2");
    }
}
