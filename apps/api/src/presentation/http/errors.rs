//! HTTP error handling and response conversion.
//!
//! The service distinguishes a single error kind: an id-addressed operation
//! that finds no matching city. Body-parsing failures never reach a handler;
//! axum's `Json` extractor rejects them first with its own 4xx response.

use crate::domain::city::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Error body returned with every 404.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "City not found")]
    pub message: String,
}

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!("error={}", self);

        let body = ErrorMessage {
            message: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
        }
    }
}
