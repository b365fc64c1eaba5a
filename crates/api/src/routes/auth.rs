//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use pulseboard_core::Email;

use crate::error::{AppError, Result};
use crate::models::user::PublicUser;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Login request body.
///
/// Fields are optional so a missing field is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

/// Password login.
///
/// POST /api/login
///
/// # Errors
///
/// Returns 400 if email or password is absent, 401 with a generic message
/// for any credential failure (unknown email and wrong password are
/// indistinguishable by design).
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (
        body.email.filter(|e| !e.is_empty()),
        body.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::Validation(
            "Email and password are required.".to_owned(),
        ));
    };

    // An unparseable email can't match any stored user; report it the same
    // way as a failed lookup so nothing leaks.
    let email = Email::parse(&email).map_err(|_| AppError::Auth(AuthError::InvalidCredentials))?;

    let auth = AuthService::new(state.pool(), state.tokens());
    let (user, token) = auth.login(&email, &password).await?;

    tracing::info!(user_id = %user.id, "login succeeded");

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        user: PublicUser::from(&user),
    }))
}
