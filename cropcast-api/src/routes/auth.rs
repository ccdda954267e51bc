/// Registration and login endpoints
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login` - Verify credentials and return the display name
///
/// There is no session or token layer; login reports success and the
/// caller's display name, nothing more.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
    routes::validation_errors,
};
use axum::{extract::State, http::StatusCode, Json};
use cropcast_shared::{
    auth::password,
    models::user::{CreateUser, User},
    validate::is_valid_email,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request
///
/// Fields default to empty when absent so that a missing key fails the
/// same way an empty value does, as a validation error.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Given name
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields cannot be empty"))]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields cannot be empty"))]
    pub last_name: String,

    /// Email address; must be unique
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields cannot be empty"))]
    pub email: String,

    /// Password (stored only as a hash)
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields cannot be empty"))]
    pub password: String,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message
    pub message: String,

    /// Newly assigned user ID
    pub user_id: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    #[serde(default)]
    pub email: String,

    /// Password
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Confirmation message
    pub message: String,

    /// The user's display name, "First Last"
    pub full_name: String,
}

/// Registration handler
///
/// # Endpoint
///
/// ```text
/// POST /register
/// Content-Type: application/json
///
/// {
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "email": "jane@example.com",
///   "password": "hunter2!"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: empty fields or bad email format
/// - `409 Conflict`: email already registered
/// - `500 Internal Server Error`: store or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    // Validate field presence
    req.validate().map_err(validation_errors)?;

    // Validate email format
    if !is_valid_email(&req.email) {
        return Err(ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "email".to_string(),
            message: "Invalid email format".to_string(),
        }]));
    }

    // Reject duplicate emails up front; the store's unique constraint is
    // the backstop for the race between probe and insert
    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists.".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "Registered new user");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully!".to_string(),
            user_id: user.id.to_string(),
        }),
    ))
}

/// Login handler
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// {
///   "email": "jane@example.com",
///   "password": "hunter2!"
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: unknown email or wrong password — callers cannot
///   tell which
/// - `500 Internal Server Error`: store or hashing failure
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password.".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password.".to_string(),
        ));
    }

    User::update_last_login(&state.db, user.id).await?;

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        full_name: user.full_name(),
    }))
}
