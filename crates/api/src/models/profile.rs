//! Social-profile domain types.
//!
//! One [`SocialProfile`] per managed client account. The nested metric,
//! analytics, post and engagement records are stored as JSONB documents and
//! serialized to the dashboard with camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pulseboard_core::{Email, ProfileId, ProfileStatus, UserId, average_growth, parse_percent};

/// A managed social-media client account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    /// Unique profile ID.
    pub id: ProfileId,
    /// Optional back-reference to the owning dashboard user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Short display name (e.g., the handle shown on cards).
    pub name: String,
    /// Client's full name.
    pub full_name: String,
    /// Contact email; unique across profiles.
    pub email: Email,
    /// Client company.
    pub company: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Lifecycle status.
    pub status: ProfileStatus,
    /// Formatted follower count (e.g., "12.5K").
    pub followers: String,
    /// Formatted follower growth (e.g., "+12.5%").
    pub growth: String,
    /// Ordered list of platform names the client is active on.
    pub platforms: Vec<String>,
    /// Aggregate counts and rates.
    pub metrics: ProfileMetrics,
    /// Chart series for the dashboard.
    pub analytics: ProfileAnalytics,
    /// Most recent posts, newest first.
    pub recent_posts: Vec<RecentPost>,
    /// Per-platform follower snapshots.
    pub platform_engagement: Vec<PlatformEngagement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored counts and derived rates for a profile.
///
/// All fields are required at write time; there are no defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetrics {
    pub posts: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub impressions: u64,
    pub engagement_rate: f64,
    pub click_through_rate: f64,
    pub conversion_rate: f64,
    pub average_engagement: f64,
    pub reach: u64,
    pub response_rate: f64,
}

/// Chart series rendered by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalytics {
    pub platform_distribution: Vec<NamedSlice>,
    pub engagement_breakdown: Vec<NamedSlice>,
    pub weekly_performance: Vec<WeeklyPerformance>,
    pub monthly_growth: Vec<MonthlyGrowth>,
}

/// A labeled pie-chart slice (platform distribution, engagement breakdown).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Posts and engagement for one day of the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPerformance {
    pub day: String,
    pub posts: u64,
    pub engagement: u64,
}

/// Follower count for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyGrowth {
    pub month: String,
    pub followers: u64,
}

/// A recently published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub platform: String,
    pub content: String,
    pub days_ago: u32,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Follower snapshot for one platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEngagement {
    pub platform: String,
    pub followers: String,
    pub growth: String,
}

/// A profile document as it arrives from seed tooling, before the store
/// assigns an ID and timestamps.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub full_name: String,
    pub email: Email,
    pub company: String,
    pub avatar: String,
    /// Defaults to `active`, matching the stored column default.
    #[serde(default)]
    pub status: ProfileStatus,
    pub followers: String,
    pub growth: String,
    pub platforms: Vec<String>,
    pub metrics: ProfileMetrics,
    pub analytics: ProfileAnalytics,
    #[serde(default)]
    pub recent_posts: Vec<RecentPost>,
    #[serde(default)]
    pub platform_engagement: Vec<PlatformEngagement>,
}

/// Fields computed at read time for the single-profile endpoint.
///
/// Never persisted; derived from the stored counts on every request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// likes + comments + shares.
    pub total_engagement: u64,
    /// Total engagement per post, integer-rounded; zero when there are no posts.
    pub avg_post_engagement: u64,
    /// Number of platforms the client is active on.
    pub platform_count: usize,
    /// Number of recent posts on record.
    pub recent_posts_count: usize,
}

impl SocialProfile {
    /// Compute the derived metrics served alongside a single profile.
    #[must_use]
    pub fn derived_metrics(&self) -> DerivedMetrics {
        let total_engagement =
            self.metrics.likes + self.metrics.comments + self.metrics.shares;

        let avg_post_engagement = if self.metrics.posts > 0 {
            div_round(total_engagement, self.metrics.posts)
        } else {
            0
        };

        DerivedMetrics {
            total_engagement,
            avg_post_engagement,
            platform_count: self.platforms.len(),
            recent_posts_count: self.recent_posts.len(),
        }
    }
}

/// Integer-rounded engagement per post, matching what the dashboard shows.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn div_round(total: u64, posts: u64) -> u64 {
    (total as f64 / posts as f64).round() as u64
}

/// Aggregate stats across all profiles.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_users: u64,
    pub active_users: u64,
    pub average_growth: String,
}

/// Status and growth projection of one profile, enough for [`aggregate_stats`].
#[derive(Debug, Clone)]
pub struct StatsRow {
    pub status: ProfileStatus,
    pub growth: String,
}

/// Fold stats rows into the dashboard summary.
///
/// Growth strings that do not parse as percentages are excluded from the
/// average rather than counted as zero.
#[must_use]
pub fn aggregate_stats(rows: &[StatsRow]) -> ProfileStats {
    let total_users = rows.len() as u64;
    let active_users = rows.iter().filter(|r| r.status.is_active()).count() as u64;

    let growth_values: Vec<f64> = rows
        .iter()
        .filter_map(|r| parse_percent(&r.growth))
        .collect();

    ProfileStats {
        total_users,
        active_users,
        average_growth: average_growth(&growth_values),
    }
}
