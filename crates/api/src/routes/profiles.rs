//! Profile route handlers.
//!
//! Success responses use the `{success, data, message}` envelope the
//! dashboard consumes; the stats endpoint returns its summary object bare.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use pulseboard_core::ProfileId;

use crate::error::{AppError, Result};
use crate::models::profile::{DerivedMetrics, ProfileStats, SocialProfile};
use crate::services::ProfileService;
use crate::state::AppState;

/// Success envelope for profile responses.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub message: &'static str,
}

impl<T> Envelope<T> {
    const fn new(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }
}

/// A profile together with its read-time derived metrics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetail {
    pub profile: SocialProfile,
    pub additional_metrics: DerivedMetrics,
}

/// All profiles, unfiltered and unpaginated.
///
/// GET /api/profile
///
/// # Errors
///
/// Returns 500 on store failure.
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<SocialProfile>>>> {
    let profiles = ProfileService::new(state.pool()).list().await?;

    Ok(Json(Envelope::new(
        profiles,
        "Social profiles retrieved successfully",
    )))
}

/// One profile by ID, with derived metrics.
///
/// GET /api/profile/{id}
///
/// # Errors
///
/// Returns 400 for a malformed ID, 404 for a well-formed but unknown ID,
/// 500 on store failure.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ProfileDetail>>> {
    let id = ProfileId::parse(&id)
        .map_err(|_| AppError::Validation("Invalid profile ID format".to_owned()))?;

    let (profile, additional_metrics) = ProfileService::new(state.pool()).get(id).await?;

    Ok(Json(Envelope::new(
        ProfileDetail {
            profile,
            additional_metrics,
        },
        "Social profile retrieved successfully",
    )))
}

/// Aggregate stats across all profiles.
///
/// GET /api/profile/profile-stats
///
/// # Errors
///
/// Returns 500 on store failure.
pub async fn stats(State(state): State<AppState>) -> Result<Json<ProfileStats>> {
    let stats = ProfileService::new(state.pool()).stats().await?;
    Ok(Json(stats))
}
