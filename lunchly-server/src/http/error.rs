//! API error types with IntoResponse
//!
//! Errors are rendered as HTML error pages with the matching status code.
//! Store failures other than NotFound are logged and shown generically.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::render;
use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Form input failed validation (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { message: String },

    /// Constraint violation, connection failure or other database error (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match &self {
            Self::Validation(e) => render::error_page("Invalid input", &e.to_string()),
            Self::NotFound { message } => render::error_page("Not Found", message),
            Self::Store(e) => {
                // Log the actual error, show a generic message
                tracing::error!(kind = ?e.kind(), "store error: {}", e);
                render::error_page("Server Error", "an internal error occurred")
            }
        };

        (status, page).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound {
                message: e.to_string(),
            },
            _ => Self::Store(e),
        }
    }
}
