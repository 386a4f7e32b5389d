use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::users::repo::RepoError;

/// Failures that end a request. Absence is not an error and never lands here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Storage(#[from] RepoError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Json(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Path(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Storage(ref e) => {
                error!(error = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_is_400() {
        let res = ApiError::InvalidId("abc".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_errors_are_500() {
        let res = ApiError::from(RepoError::CapacityExceeded { capacity: 3 }).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_id_message_quotes_input() {
        assert_eq!(
            ApiError::InvalidId("12x".into()).to_string(),
            "invalid id: \"12x\""
        );
    }
}
