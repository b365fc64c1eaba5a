//! Social-profile repository for database operations.
//!
//! Profiles are document-shaped: scalar columns for the fields the
//! dashboard filters on, JSONB for the nested records that are only ever
//! read back whole.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use pulseboard_core::{Email, ProfileId, ProfileStatus, UserId};

use super::RepositoryError;
use crate::models::profile::{
    NewProfile, PlatformEngagement, ProfileAnalytics, ProfileMetrics, RecentPost, SocialProfile,
    StatsRow,
};

// =============================================================================
// Internal Row Types
// =============================================================================

const PROFILE_COLUMNS: &str = "id, user_id, name, full_name, email, company, avatar, status, \
     followers, growth, platforms, metrics, analytics, recent_posts, \
     platform_engagement, created_at, updated_at";

/// Internal row type for `PostgreSQL` profile queries.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Option<Uuid>,
    name: String,
    full_name: String,
    email: String,
    company: String,
    avatar: String,
    status: ProfileStatus,
    followers: String,
    growth: String,
    platforms: Vec<String>,
    metrics: Json<ProfileMetrics>,
    analytics: Json<ProfileAnalytics>,
    recent_posts: Json<Vec<RecentPost>>,
    platform_engagement: Json<Vec<PlatformEngagement>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for SocialProfile {
    type Error = RepositoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: ProfileId::new(row.id),
            user_id: row.user_id.map(UserId::new),
            name: row.name,
            full_name: row.full_name,
            email,
            company: row.company,
            avatar: row.avatar,
            status: row.status,
            followers: row.followers,
            growth: row.growth,
            platforms: row.platforms,
            metrics: row.metrics.0,
            analytics: row.analytics.0,
            recent_posts: row.recent_posts.0,
            platform_engagement: row.platform_engagement.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Projection row for the stats endpoint; only status and growth are read.
#[derive(Debug, sqlx::FromRow)]
struct StatsProjectionRow {
    status: ProfileStatus,
    growth: String,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for social-profile database operations.
pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    /// Create a new profile repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get every profile, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored document is invalid.
    pub async fn list(&self) -> Result<Vec<SocialProfile>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM social_profiles ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(SocialProfile::try_from).collect()
    }

    /// Get one profile by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored document is invalid.
    pub async fn get_by_id(
        &self,
        id: ProfileId,
    ) -> Result<Option<SocialProfile>, RepositoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM social_profiles WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        row.map(SocialProfile::try_from).transpose()
    }

    /// Read the status/growth projection used by the stats endpoint.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_stats_rows(&self) -> Result<Vec<StatsRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, StatsProjectionRow>(
            "SELECT status, growth FROM social_profiles",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| StatsRow {
                status: r.status,
                growth: r.growth,
            })
            .collect())
    }

    /// Insert a new profile document (seed tooling path).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the profile email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, profile: &NewProfile) -> Result<ProfileId, RepositoryError> {
        let row = sqlx::query_as::<_, (Uuid,)>(
            r"
            INSERT INTO social_profiles
                (user_id, name, full_name, email, company, avatar, status,
                 followers, growth, platforms, metrics, analytics,
                 recent_posts, platform_engagement)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id
            ",
        )
        .bind(profile.user_id.map(|id| id.as_uuid()))
        .bind(&profile.name)
        .bind(&profile.full_name)
        .bind(profile.email.as_str())
        .bind(&profile.company)
        .bind(&profile.avatar)
        .bind(profile.status)
        .bind(&profile.followers)
        .bind(&profile.growth)
        .bind(&profile.platforms)
        .bind(Json(&profile.metrics))
        .bind(Json(&profile.analytics))
        .bind(Json(&profile.recent_posts))
        .bind(Json(&profile.platform_engagement))
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("profile email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(ProfileId::new(row.0))
    }
}
