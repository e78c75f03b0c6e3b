//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The variant decides the status
//! code and the machine-readable `code` in the response body:
//!
//! | Variant      | Status | `code`              |
//! |--------------|--------|---------------------|
//! | `Validation` | 400    | `validation_error`  |
//! | `Reference`  | 400    | `invalid_reference` |
//! | `NotFound`   | 404    | `not_found`         |
//! | `Conflict`   | 409    | `conflict`          |
//! | `Store`      | 500    | `database_error`    |
//! | `Internal`   | 500    | `internal_error`    |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Unique constraint guarding `users.email`.
const USERS_EMAIL_CONSTRAINT: &str = "users_email_key";

/// SQLSTATEs for text the server cannot store, e.g. a NUL byte.
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";
const UNTRANSLATABLE_CHARACTER: &str = "22P05";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Client-visible error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Reference { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("database error: {0}")]
    Store(#[source] sqlx::Error),
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_reference(message: impl Into<String>, details: Value) -> Self {
        Self::Reference {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Missing or empty required body fields.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::bad_request(
            format!("{} required", fields.join(", ")),
            json!({ "fields": fields }),
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Reference { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Store(_) | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its client-visible form.
    ///
    /// Store errors are reduced to a generic message; the driver error never
    /// reaches the client.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::Reference { message, details } => {
                ("invalid_reference", message.clone(), details.clone())
            }
            AppError::NotFound { message, details } => {
                ("not_found", message.clone(), details.clone())
            }
            AppError::Conflict { message, details } => {
                ("conflict", message.clone(), details.clone())
            }
            AppError::Store(_) => ("database_error", "Database error".to_string(), json!({})),
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                let details = match db.constraint() {
                    Some(USERS_EMAIL_CONSTRAINT) => json!({ "field": "email" }),
                    _ => json!({}),
                };
                return AppError::conflict("Unique constraint violation", details);
            }

            if db.is_foreign_key_violation() {
                return AppError::invalid_reference("Referenced record does not exist", json!({}));
            }

            if matches!(
                db.code().as_deref(),
                Some(CHARACTER_NOT_IN_REPERTOIRE | UNTRANSLATABLE_CHARACTER)
            ) {
                return AppError::bad_request("Invalid characters in input", json!({}));
            }
        }

        AppError::Store(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        AppError::bad_request(
            "Missing or invalid fields",
            json!({ "fields": fields }),
        )
    }
}
