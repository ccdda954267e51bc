/// Profile read and update endpoints
///
/// # Endpoints
///
/// - `PUT /update-profile` - Sparse profile update
/// - `POST /get-profile` - Profile read
///
/// The update is sparse: the three identity fields are always written, the
/// password hash only when the request carries a new password. Validation
/// happens before anything touches the store, so a rejected request leaves
/// the record untouched.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
    routes::validation_errors,
};
use axum::{extract::State, Json};
use cropcast_shared::{
    auth::password,
    models::user::{UpdateProfile, User},
    validate::is_valid_email,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;
use validator::Validate;

/// Upper bound on any single store call made by these handlers. Hitting it
/// surfaces as an internal error; there are no retries.
const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Update profile request
///
/// `password` is optional: absent (or empty) means the stored hash is left
/// untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// The user's opaque identifier
    #[serde(default)]
    pub id: String,

    /// New given name
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields cannot be empty"))]
    pub first_name: String,

    /// New family name
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields cannot be empty"))]
    pub last_name: String,

    /// New email address
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields cannot be empty"))]
    pub email: String,

    /// New password, if the user is changing it
    pub password: Option<String>,
}

/// Update profile response
#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    /// Confirmation message
    pub message: String,

    /// The updated record, without the hash
    pub user: ProfileView,
}

/// Get profile request
#[derive(Debug, Deserialize)]
pub struct GetProfileRequest {
    /// The user's opaque identifier
    #[serde(default)]
    pub id: String,
}

/// Client-facing projection of a user record.
///
/// The password hash is not a field here, so no response built from this
/// type can carry it.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for ProfileView {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Profile update handler
///
/// # Endpoint
///
/// ```text
/// PUT /update-profile
/// Content-Type: application/json
///
/// {
///   "id": "9f0e...",
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "email": "jane@example.com",
///   "password": "optional-new-password"
/// }
/// ```
///
/// # Flow
///
/// 1. Field presence validation (all three identity fields non-empty)
/// 2. Email format validation
/// 3. Hash the new password, only if one was supplied
/// 4. Sparse update keyed by id; a missing id is a 404
///
/// # Errors
///
/// - `400 Bad Request`: empty fields, bad email format, or malformed id
/// - `404 Not Found`: no user with this id
/// - `500 Internal Server Error`: store failure or timeout
pub async fn update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    // Validate field presence
    req.validate().map_err(validation_errors)?;

    // Validate email format
    if !is_valid_email(&req.email) {
        return Err(ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "email".to_string(),
            message: "Invalid email format".to_string(),
        }]));
    }

    let id = Uuid::parse_str(&req.id)
        .map_err(|_| ApiError::BadRequest("Invalid user id".to_string()))?;

    // Hash the password only if the request is changing it; an absent or
    // empty password leaves the stored hash as-is
    let password_hash = match req.password.as_deref() {
        Some(plaintext) if !plaintext.is_empty() => Some(password::hash_password(plaintext)?),
        _ => None,
    };

    let update = UpdateProfile {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password_hash,
    };

    let updated = with_store_timeout(User::update_profile(&state.db, id, update)).await??;

    let user = updated.ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "Updated user profile");

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: ProfileView::from(user),
    }))
}

/// Profile read handler
///
/// # Endpoint
///
/// ```text
/// POST /get-profile
/// Content-Type: application/json
///
/// {"id": "9f0e..."}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: malformed id
/// - `404 Not Found`: no user with this id
/// - `500 Internal Server Error`: store failure or timeout
pub async fn get_profile(
    State(state): State<AppState>,
    Json(req): Json<GetProfileRequest>,
) -> ApiResult<Json<ProfileView>> {
    let id = Uuid::parse_str(&req.id)
        .map_err(|_| ApiError::BadRequest("Invalid user id".to_string()))?;

    let user = with_store_timeout(User::find_by_id(&state.db, id))
        .await??
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileView::from(user)))
}

/// Bounds a store call at [`STORE_TIMEOUT`]; elapse maps to an internal
/// error.
async fn with_store_timeout<T>(
    fut: impl std::future::Future<Output = Result<T, sqlx::Error>>,
) -> Result<Result<T, sqlx::Error>, ApiError> {
    tokio::time::timeout(STORE_TIMEOUT, fut)
        .await
        .map_err(|_| ApiError::InternalError("Store operation timed out".to_string()))
}
