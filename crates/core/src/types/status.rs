//! Profile status enum.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a managed social-media profile.
///
/// Stored in `PostgreSQL` as the `profile_status` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "profile_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    /// Actively managed; counted in dashboard stats.
    #[default]
    Active,
    /// Management temporarily suspended.
    Paused,
    /// No longer managed.
    Inactive,
}

impl ProfileStatus {
    /// Whether this profile counts as active for aggregate stats.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Paused => write!(f, "paused"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for ProfileStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("invalid profile status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProfileStatus::Active).unwrap(),
            "\"active\""
        );
        let parsed: ProfileStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(parsed, ProfileStatus::Paused);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("archived".parse::<ProfileStatus>().is_err());
    }

    #[test]
    fn test_is_active() {
        assert!(ProfileStatus::Active.is_active());
        assert!(!ProfileStatus::Paused.is_active());
        assert!(!ProfileStatus::Inactive.is_active());
    }
}
