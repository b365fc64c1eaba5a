//! Pulseboard Core - Shared types library.
//!
//! This crate provides common types used across all Pulseboard components:
//! - `api` - REST backend serving the dashboard
//! - `cli` - Command-line tools for migrations and data management
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, profile status, and growth-rate parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
