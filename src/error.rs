use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Model invocation error: {0}")]
    ModelInvocation(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        let (status, detail) = match self {
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", err),
            ),
            // The provider's message is forwarded verbatim as the detail.
            AppError::ModelInvocation(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::InternalError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
