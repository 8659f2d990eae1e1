//! API error types and their JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use sme_debt_core::SmeDebtError;

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload fails calculator validation.
    #[error("{0}")]
    Validation(String),

    /// A ratio is undefined for the submitted figures.
    #[error("{0}")]
    UndefinedRatio(String),

    /// A debt's minimum payment cannot amortize its balance.
    #[error("{0}")]
    InsufficientPayment(String),

    /// Unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UndefinedRatio(_) | Self::InsufficientPayment(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid_input",
            Self::UndefinedRatio(_) => "undefined_ratio",
            Self::InsufficientPayment(_) => "insufficient_payment",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<SmeDebtError> for ApiError {
    fn from(e: SmeDebtError) -> Self {
        match e {
            SmeDebtError::InvalidInput { .. } => Self::Validation(e.to_string()),
            SmeDebtError::DivisionByZero { .. } => Self::UndefinedRatio(e.to_string()),
            SmeDebtError::InsufficientPayment { .. } => Self::InsufficientPayment(e.to_string()),
            SmeDebtError::SerializationError(_) => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({
                "error": self.error_code(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
