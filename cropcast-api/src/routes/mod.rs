/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `profile`: Profile read and sparse update
/// - `predict`: Crop and fertilizer recommendation

pub mod auth;
pub mod health;
pub mod predict;
pub mod profile;

use crate::error::{ApiError, ValidationErrorDetail};

/// Flattens `validator` field errors into the API error shape.
pub(crate) fn validation_errors(errors: validator::ValidationErrors) -> ApiError {
    let details: Vec<ValidationErrorDetail> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| ValidationErrorDetail {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string()),
            })
        })
        .collect();

    ApiError::ValidationError(details)
}
