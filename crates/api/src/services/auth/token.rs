//! Signed bearer tokens for authenticated dashboard sessions.
//!
//! Tokens are HS256 JWTs carrying the user id, display name and email with
//! a fixed one-hour expiry. The signing secret comes from validated
//! configuration only; there is no built-in fallback.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use pulseboard_core::{Email, UserId};

use crate::models::user::User;

/// How long an issued token stays valid.
const TOKEN_TTL_HOURS: i64 = 1;

/// Claims encoded into every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: UserId,
    /// User's display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Signs and verifies dashboard bearer tokens.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    /// Build a signer from the configured secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a token for a logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` if encoding fails.
    pub fn sign(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            name: user.full_name.clone(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Decode and validate a token, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` if the signature is invalid or
    /// the token has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new(&SecretString::from("kP9#mW2$vN8@qR5!xT3&bL7*cJ4^hF6z"))
    }

    fn sample_user() -> User {
        User {
            id: UserId::generate(),
            email: Email::parse("manager@agency.com").unwrap(),
            full_name: "Morgan Reyes".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_sign_then_verify_same_user() {
        let signer = signer();
        let user = sample_user();

        let token = signer.sign(&user).unwrap();
        let claims = signer.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.name, user.full_name);
        assert_eq!(claims.email, user.email);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = signer().sign(&sample_user()).unwrap();

        let other = TokenSigner::new(&SecretString::from("zF6^hJ4*cL7&bT3!xR5@qN8$vW2#mP9k"));
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(signer().verify("not.a.token").is_err());
    }
}
