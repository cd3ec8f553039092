//! Mapping of every failure the API can produce onto an HTTP response.

use aide::{
    OperationOutput,
    generate::GenContext,
    openapi::{Operation, Response as ApiResponse},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::Serialize;
use std::fmt::Display;
use store_core::ports::ProductFailure;
use thiserror::Error;
use tracing::{Level, event};
use validator::ValidationErrors;

/// The JSON body of every error response.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorBody {
    /// Machine-readable error kind, e.g. `VALIDATION_ERROR`
    pub error: String,
    /// Human-readable description
    pub message: String,
    /// Per-field validation failures, when there are any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path, query or body did not satisfy its constraints
    #[error("{message}")]
    Validation {
        /// Summary of what was wrong
        message: String,
        /// Field name to list of `{code, message}`
        details: Option<serde_json::Value>,
    },

    /// No usable credentials were presented
    #[error("missing or malformed credentials")]
    Unauthorized,

    /// Credentials were presented but lack the admin role
    #[error("admin role required")]
    Forbidden,

    /// The repository refused the operation
    #[error(transparent)]
    Product(#[from] ProductFailure),

    /// The repository failed; the cause has been logged
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// A validation failure with a single message and no field details.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// A validation failure on a single field.
    pub fn invalid_field(field: &str, code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut details = serde_json::Map::new();
        details.insert(
            field.to_owned(),
            serde_json::json!([{ "code": code, "message": message }]),
        );
        Self::Validation {
            message,
            details: Some(serde_json::Value::Object(details)),
        }
    }

    /// Log an infrastructure error and replace it with a generic message.
    pub fn internal(err: impl Display, message: impl Into<String>) -> Self {
        event!(Level::ERROR, err = err.to_string());
        Self::Internal(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Product(ProductFailure::DoesNotExist) => StatusCode::NOT_FOUND,
            Self::Product(ProductFailure::NameConflict) => StatusCode::CONFLICT,
            Self::Product(ProductFailure::InvalidSort(_)) => StatusCode::BAD_REQUEST,
            Self::Product(ProductFailure::InvalidFilter(_)) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Product(ProductFailure::DoesNotExist) => "NOT_FOUND",
            Self::Product(ProductFailure::NameConflict) => "CONFLICT",
            Self::Product(ProductFailure::InvalidSort(_)) => "INVALID_SORT",
            Self::Product(ProductFailure::InvalidFilter(_)) => "INVALID_FILTER",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|err| {
                        serde_json::json!({
                            "code": err.code,
                            "message": err.message,
                        })
                    })
                    .collect::<Vec<_>>();
                (field.to_string(), serde_json::Value::Array(messages))
            })
            .collect::<serde_json::Map<_, _>>();

        Self::Validation {
            message: "Request validation failed".to_string(),
            details: Some(serde_json::Value::Object(details)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let (message, details) = match self {
            Self::Validation { message, details } => (message, details),
            other => (other.to_string(), None),
        };
        let body = ErrorBody {
            error: kind.to_string(),
            message,
            details,
        };
        (status, Json(body)).into_response()
    }
}

impl OperationOutput for ApiError {
    type Inner = ErrorBody;

    fn operation_response(ctx: &mut GenContext, operation: &mut Operation) -> Option<ApiResponse> {
        Json::<ErrorBody>::operation_response(ctx, operation)
    }
}
