//! Core types for Pulseboard.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod growth;
pub mod id;
pub mod status;

pub use email::{Email, EmailError};
pub use growth::{average_growth, parse_percent};
pub use id::*;
pub use status::ProfileStatus;
