//! Profile read service.
//!
//! Every operation is a single stateless read; derived fields are computed
//! on the way out and never persisted.

use sqlx::PgPool;

use pulseboard_core::ProfileId;

use crate::db::RepositoryError;
use crate::db::profiles::ProfileRepository;
use crate::models::profile::{DerivedMetrics, ProfileStats, SocialProfile, aggregate_stats};

/// Errors that can occur while serving profile reads.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    /// No profile with the requested ID.
    #[error("social profile not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Read-only service over the profile collection.
pub struct ProfileService<'a> {
    profiles: ProfileRepository<'a>,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            profiles: ProfileRepository::new(pool),
        }
    }

    /// Every profile, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Repository` if the read fails.
    pub async fn list(&self) -> Result<Vec<SocialProfile>, ProfileServiceError> {
        Ok(self.profiles.list().await?)
    }

    /// One profile plus its read-time derived metrics.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::NotFound` if no profile has this ID.
    /// Returns `ProfileServiceError::Repository` if the read fails.
    pub async fn get(
        &self,
        id: ProfileId,
    ) -> Result<(SocialProfile, DerivedMetrics), ProfileServiceError> {
        let profile = self
            .profiles
            .get_by_id(id)
            .await?
            .ok_or(ProfileServiceError::NotFound)?;

        let derived = profile.derived_metrics();
        Ok((profile, derived))
    }

    /// Aggregate stats across all profiles.
    ///
    /// Reads only the status/growth projection, then folds it in memory.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Repository` if the read fails.
    pub async fn stats(&self) -> Result<ProfileStats, ProfileServiceError> {
        let rows = self.profiles.list_stats_rows().await?;
        Ok(aggregate_stats(&rows))
    }
}
