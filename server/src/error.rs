//! HTTP error mapping

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use brandstore_core::BrandError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Brand(#[from] BrandError),

    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("Invalid brand id: {}", .0.body_text())]
    Path(#[from] PathRejection),

    #[error("Worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Brand(BrandError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Brand(BrandError::Mismatch { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Body(_) | ApiError::Path(_) => StatusCode::BAD_REQUEST,
            ApiError::Brand(BrandError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Brand(BrandError::Storage(_))
            | ApiError::Brand(BrandError::Config(_))
            | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn is_client_error(&self) -> bool {
        match self {
            ApiError::Brand(e) => e.is_client_error(),
            ApiError::Body(_) | ApiError::Path(_) => true,
            ApiError::Task(_) => false,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Infrastructure details stay in the log
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            tracing::error!(error = %self, "Request failed");
            "Internal server error".to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandstore_core::StorageError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (BrandError::Validation("blank".into()), StatusCode::BAD_REQUEST),
            (
                BrandError::Mismatch {
                    path_id: 1,
                    body_id: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
            (BrandError::NotFound(7), StatusCode::NOT_FOUND),
            (
                BrandError::Storage(StorageError::UnsupportedSchema {
                    found: 9,
                    supported: 1,
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
