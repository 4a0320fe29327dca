//! API error taxonomy for the glue endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Three terminal outcomes: missing required fields (400), wrong HTTP
//! method (405), and everything else collapsed into a per-endpoint
//! generic 500. Internal detail is logged, never returned to callers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is missing one or more required fields.
    #[error("{0}")]
    Validation(String),
    /// Endpoint exists but the HTTP method is not supported.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Caught internal failure; `public` is the only text exposed.
    #[error("{public}")]
    Unexpected { public: String },
}

impl ApiError {
    /// Wrap an internal failure, logging the detail and keeping only the
    /// endpoint's generic message for the response body.
    pub fn unexpected(public: &str, detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "request failed");
        Self::Unexpected { public: public.to_owned() }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
