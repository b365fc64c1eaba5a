//! Profile seeding command.
//!
//! Loads a JSON array of profile documents and inserts them. This is the
//! out-of-band write path for the profile collection.

use pulseboard_api::db::ProfileRepository;
use pulseboard_api::models::profile::NewProfile;

use super::{CommandError, connect};

/// Insert profile documents from a JSON file.
///
/// The file holds a JSON array in the same camelCase shape the API serves,
/// minus `id` and timestamps (the store assigns those).
///
/// # Errors
///
/// Returns `CommandError` for unreadable or malformed input, or if an
/// insert fails (e.g., duplicate profile email).
pub async fn run(path: &str) -> Result<(), CommandError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let profiles: Vec<NewProfile> = serde_json::from_str(&raw)?;

    if profiles.is_empty() {
        tracing::warn!("seed file contains no profiles");
        return Ok(());
    }

    let pool = connect().await?;
    let repo = ProfileRepository::new(&pool);

    for profile in &profiles {
        let id = repo.insert(profile).await?;
        tracing::info!(profile_id = %id, email = %profile.email, "profile seeded");
    }

    tracing::info!(count = profiles.len(), "seed complete");
    Ok(())
}
