use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use folio_core::error::IngestError;
use folio_export::error::ExportError;

use crate::routes::form;

/// Unified error type for all route handlers.
///
/// Every variant is shown to the user on the form page; nothing is offered
/// for download when a conversion fails.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Unprocessable(String),
    /// Server-side failure. Only `message` reaches the user; `detail` is
    /// logged.
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn internal(message: &str, detail: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.to_string(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal { message, detail } => {
                tracing::error!("conversion failed: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), "rejected upload: {message}");
        }

        (status, Html(form::page(Some(&message)))).into_response()
    }
}

impl From<IngestError> for ApiError {
    fn from(e: IngestError) -> Self {
        match e {
            IngestError::MissingColumn(_) | IngestError::EmptyInput => {
                ApiError::Unprocessable(e.to_string())
            }
            IngestError::Csv(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::EmptyInput => ApiError::Unprocessable(e.to_string()),
            ExportError::AssetNotFound { .. }
            | ExportError::AssetUnreadable { .. }
            | ExportError::Logo(_) => {
                ApiError::internal("the report logo is not available", e.to_string())
            }
            ExportError::Pdf(_) => {
                ApiError::internal("the report could not be generated", e.to_string())
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge("the uploaded file is too large".to_string())
        } else {
            ApiError::BadRequest(e.body_text())
        }
    }
}
