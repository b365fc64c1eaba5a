//! User creation command.
//!
//! The API has no registration endpoint; this is the only way users are
//! created. Passwords are hashed with argon2id before they touch the
//! database.

use pulseboard_api::db::UserRepository;
use pulseboard_api::services::auth::hash_password;
use pulseboard_core::Email;

use super::{CommandError, connect};

/// Create a dashboard user.
///
/// # Errors
///
/// Returns `CommandError::InvalidInput` for a malformed email or a
/// password that fails hashing, `CommandError::Repository` if the email
/// is already taken.
pub async fn create(email: &str, name: &str, password: &str) -> Result<(), CommandError> {
    let email = Email::parse(email)
        .map_err(|e| CommandError::InvalidInput(format!("invalid email: {e}")))?;

    let password_hash = hash_password(password)
        .map_err(|e| CommandError::InvalidInput(format!("password hashing failed: {e}")))?;

    let pool = connect().await?;
    let user = UserRepository::new(&pool)
        .create(&email, name, &password_hash)
        .await?;

    tracing::info!(user_id = %user.id, email = %user.email, "user created");
    Ok(())
}
