use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single calculation request. Never fatal to the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Range or positivity violation caught before any arithmetic runs.
    #[error("{0}")]
    InvalidInput(String),

    /// Arithmetic or coercion failure (bad JSON, non-numeric field, overflow).
    #[error("{0}")]
    Computation(String),
}

impl CalcError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CalcError::InvalidInput(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        CalcError::Computation(msg.into())
    }
}

impl From<JsonRejection> for CalcError {
    fn from(rejection: JsonRejection) -> Self {
        CalcError::Computation(rejection.body_text())
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
