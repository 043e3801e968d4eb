//! Application error taxonomy and HTTP response conversion.
//!
//! Every handler returns `Result<_, AppError>`. Client-facing variants carry
//! the message that is sent back verbatim; [`AppError::Internal`] carries the
//! real cause, which is logged and replaced by a generic message so store or
//! driver details never reach the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or has the wrong type.
    #[error("{0}")]
    Validation(String),

    /// A path or body identifier does not match the store's identifier format.
    #[error("{0}")]
    MalformedId(String),

    #[error("{0}")]
    NotFound(String),

    /// No authenticated user in the session.
    #[error("{0}")]
    Unauthorized(String),

    /// A unique field (user email) is already taken.
    #[error("{0}")]
    Conflict(String),

    /// Store, session, hashing or upstream failure. Rendered as a generic 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn malformed_id(msg: impl Into<String>) -> Self {
        Self::MalformedId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedId(_) | Self::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(err) => {
                tracing::error!(error = ?err, "Internal error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
