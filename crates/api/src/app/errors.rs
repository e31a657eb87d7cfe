use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use books_core::DomainError;
use books_infra::BooksError;

pub const CREATE_INVOICE_FAILED: &str = "Failed to create invoice";

/// Every failure a handler can return, mapped onto the `{error, ...}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Upstream(#[from] BooksError),

    /// Zoho Books rejected (or never answered) a create request.
    #[error("Failed to create invoice: {0}")]
    CreateInvoice(BooksError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::MissingField(_) | DomainError::InvalidBody(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Domain(DomainError::UnexpectedShape(_))
            | ApiError::Upstream(_)
            | ApiError::CreateInvoice(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::CreateInvoice(e) => json!({
                "error": CREATE_INVOICE_FAILED,
                "details": e.details(),
            }),
            other => json_error_body(other.to_string()),
        };
        (status, axum::Json(body)).into_response()
    }
}

pub fn json_error_body(message: impl Into<String>) -> serde_json::Value {
    json!({ "error": message.into() })
}
