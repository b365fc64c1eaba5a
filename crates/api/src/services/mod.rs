//! Business-logic services sitting between routes and repositories.

pub mod auth;
pub mod profiles;

pub use auth::{AuthError, AuthService, TokenSigner};
pub use profiles::ProfileService;
