//! Error types for the timer engine and the HTTP surface

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the timer engine itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Errors surfaced by the application layer
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error("failed to lock {0}")]
    LockPoisoned(&'static str),
}

impl AppError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Timer(TimerError::InvalidConfiguration(_)) => "invalid_configuration",
            AppError::Timer(TimerError::InvalidStateTransition(_)) => "invalid_state_transition",
            AppError::LockPoisoned(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Timer(TimerError::InvalidConfiguration(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Timer(TimerError::InvalidStateTransition(_)) => StatusCode::CONFLICT,
            AppError::LockPoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for failed requests
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
            code: self.code(),
        };
        (status, Json(body)).into_response()
    }
}
