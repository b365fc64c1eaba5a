//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (verifies database)
//!
//! # Auth
//! POST /api/login                  - Password login, returns bearer token
//!
//! # Profiles
//! GET  /api/profile                - All profiles
//! GET  /api/profile/profile-stats  - Aggregate stats (static segment wins over {id})
//! GET  /api/profile/{id}           - One profile + derived metrics
//! ```

pub mod auth;
pub mod profiles;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(profiles::list))
        .route("/profile-stats", get(profiles::stats))
        .route("/{id}", get(profiles::show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(auth::login))
        .nest("/api/profile", profile_routes())
}
