use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Anything that went wrong while dispatching a request before a response
    /// could be built (transport failures, serialization).
    #[error("{0}")]
    Dispatch(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Helper for mapping any unknown error into a dispatch error
pub fn dispatch_error<E: ToString>(err: E) -> AppError {
    AppError::Dispatch(err.to_string())
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Dispatch(format!("{:#}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        error!("{}", self);

        match self {
            // Raw error text, same as an unhandled failure in the dispatcher
            AppError::Dispatch(message) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "text/plain; charset=UTF-8")],
                message,
            )
                .into_response(),
            AppError::Persistence(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": format!("Persistence error: {}", message) })),
            )
                .into_response(),
        }
    }
}
