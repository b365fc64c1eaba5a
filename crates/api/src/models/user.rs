//! User domain types.
//!
//! Users are created out-of-band via the CLI; the API only reads them
//! during login.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pulseboard_core::{Email, UserId};

/// A dashboard user (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The user summary returned by the login endpoint.
///
/// Never carries credential material.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub full_name: String,
    pub email: Email,
    pub id: UserId,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            id: user.id,
        }
    }
}
