//! Domain models for the API.

pub mod profile;
pub mod user;

pub use profile::{DerivedMetrics, ProfileStats, SocialProfile};
pub use user::{PublicUser, User};
