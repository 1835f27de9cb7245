use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::resume::extract::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Uploaded file exceeds the size limit")]
    PayloadTooLarge,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                self.to_string(),
            ),
            AppError::Extraction(e @ ExtractionError::UnsupportedFormat(_)) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT", e.to_string())
            }
            AppError::Extraction(e @ ExtractionError::ExtractionFailed { .. }) => {
                tracing::warn!("Extraction failed: {e}");
                (StatusCode::BAD_REQUEST, "EXTRACTION_FAILED", e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Failed to analyze resume. Please try again.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_format_is_client_error() {
        let err: AppError = ExtractionError::UnsupportedFormat("txt".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
        assert!(body["error"]["message"].as_str().unwrap().contains("txt"));
    }

    #[tokio::test]
    async fn test_extraction_failed_carries_cause() {
        let err: AppError = ExtractionError::ExtractionFailed {
            format: "PDF",
            cause: "invalid file header".to_string(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "EXTRACTION_FAILED");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("invalid file header"));
    }

    #[tokio::test]
    async fn test_internal_error_is_masked() {
        let err = AppError::Internal(anyhow::anyhow!("worker thread panicked at secret.rs"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(!body["error"]["message"].as_str().unwrap().contains("secret"));
    }
}
