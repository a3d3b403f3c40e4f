//! Error types for the HTTP layer.
//!
//! [`ApiError`] maps engine failures onto status codes and renders them as
//! `{"error", "status"}` JSON via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. A refused
//! travel move never reaches this type; it is a normal `200` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pursuit_core::CaseError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested case does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A case id could not be parsed from the request.
    #[error("invalid case id: {0}")]
    InvalidId(String),

    /// The content generator failed or returned unusable content.
    #[error("content generation failed: {0}")]
    Generation(String),

    /// The case store failed.
    #[error("store error: {0}")]
    Store(String),
}

impl From<CaseError> for ApiError {
    fn from(err: CaseError) -> Self {
        match err {
            CaseError::NotFound(id) => Self::NotFound(format!("case {id}")),
            CaseError::Generation(e) => Self::Generation(e.to_string()),
            CaseError::Store(e) => Self::Store(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) => StatusCode::BAD_GATEWAY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Errors that abort server startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: pursuit_core::ConfigError,
    },

    /// The case store could not be set up.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: pursuit_db::DbError,
    },

    /// The LLM content generator could not be set up.
    #[error("generator error: {source}")]
    Generator {
        /// The underlying generator error.
        #[from]
        source: pursuit_llm::LlmError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: crate::server::ServerError,
    },
}
