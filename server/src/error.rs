//! HTTP-facing error type.
//!
//! # Design
//! Every failure a request can hit maps to one variant, and every variant
//! renders as a status code plus a short plain-text body. There is no JSON
//! error schema; clients only get the status and the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use todo_core::StoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body did not decode as a todo payload. Carries the
    /// decoder's message verbatim.
    #[error("{0}")]
    MalformedBody(String),

    /// The path suffix after `/api/todos/` is not a base-10 integer.
    #[error("Invalid todo ID")]
    InvalidIdentifier,

    #[error("Todo not found")]
    NotFound,

    #[error("Method not allowed")]
    UnsupportedMethod,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), error = %self, "request rejected");
        (self.status(), self.to_string()).into_response()
    }
}
