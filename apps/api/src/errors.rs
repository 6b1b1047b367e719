use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::MatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::MissingInput | MatchError::Rank(_) => AppError::Validation(err.to_string()),
            MatchError::NoUsableText | MatchError::Rejected { .. } => {
                AppError::UnprocessableEntity(err.to_string())
            }
            MatchError::Storage { source, .. } => AppError::Io(source),
        }
    }
}

impl AppError {
    /// Status, machine-readable code and the message safe to show a client.
    /// Server faults are logged here and replaced with a generic message.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Multipart(e) => (e.status(), "MULTIPART_ERROR", e.body_text()),
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

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
    use crate::matching::SkipReason;

    #[test]
    fn test_match_errors_map_to_status() {
        let cases = [
            (MatchError::MissingInput, StatusCode::BAD_REQUEST),
            (MatchError::NoUsableText, StatusCode::UNPROCESSABLE_ENTITY),
            (
                MatchError::Rejected {
                    filename: "x.md".into(),
                    reason: SkipReason::UnsupportedFormat,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                MatchError::Storage {
                    filename: "x.txt".into(),
                    source: std::io::Error::other("disk full"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_validation_keeps_user_message() {
        let err = AppError::from(MatchError::MissingInput);
        assert_eq!(
            err.to_string(),
            "Validation error: Please upload resumes and enter a job description."
        );
    }

    #[test]
    fn test_server_faults_hide_details() {
        let err = AppError::from(MatchError::Storage {
            filename: "cv.txt".into(),
            source: std::io::Error::other("/var/secret/uploads is read-only"),
        });
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "STORAGE_ERROR");
        assert!(!message.contains("secret"));
    }
}
