use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vibecheck_core::errors::Error as CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::UnknownVibe(_) => (StatusCode::NOT_FOUND, e.to_string()),
                CoreError::Unauthorized => (StatusCode::UNAUTHORIZED, e.to_string()),
                CoreError::AdminSecretMissing => {
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
                CoreError::Database(_) => {
                    tracing::error!("Storage failure: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
                _ => {
                    tracing::error!("Unhandled error: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use vibecheck_core::errors::{DatabaseError, ValidationError};

    fn status_of(err: CoreError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn core_errors_map_to_http_statuses() {
        assert_eq!(
            status_of(CoreError::Validation(ValidationError::MissingField(
                "Vibe name is required".into()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::UnknownVibe("Meh".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(CoreError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(CoreError::AdminSecretMissing),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(CoreError::Database(DatabaseError::QueryFailed("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn bad_request_renders_error_body() {
        let response = ApiError::BadRequest("Invalid request body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid request body" }));
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = ApiError::from(CoreError::Validation(ValidationError::InvalidInput(
            "Invalid newState provided".into(),
        )));
        assert_eq!(err.to_string(), "Invalid newState provided");
    }
}
