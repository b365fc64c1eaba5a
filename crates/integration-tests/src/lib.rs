//! Integration tests for Pulseboard.
//!
//! # Running Tests
//!
//! The tests in `tests/` drive a live server over HTTP and are `#[ignore]`d
//! by default. To run them:
//!
//! ```bash
//! # Start PostgreSQL and apply migrations
//! cargo run -p pulseboard-cli -- migrate
//!
//! # Seed a user and demo profiles
//! cargo run -p pulseboard-cli -- user create -e it@agency.com -n "IT User" -p 'test-password'
//! cargo run -p pulseboard-cli -- seed -f demo-profiles.json
//!
//! # Start the API, then:
//! cargo test -p pulseboard-integration-tests -- --ignored
//! ```
//!
//! `API_BASE_URL` overrides the default `http://localhost:5000`.
