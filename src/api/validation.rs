//! Path parameter validation.
//!
//! Request bodies are validated by their DTOs (see [`crate::api::dto`]); this
//! module covers identifiers taken from the URL.

use serde_json::json;

use crate::error::AppError;

/// Parses a path segment as a non-negative integer identifier.
///
/// `kind` names the resource in the error message, e.g. `"user"`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `raw` is not a non-negative integer that
/// fits in `i64`.
pub fn parse_id(raw: &str, kind: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| {
            AppError::bad_request(format!("Invalid {kind} ID"), json!({ "id": raw }))
        })
}
