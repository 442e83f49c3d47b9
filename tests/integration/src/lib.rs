//! Integration test utilities for the setlist server
//!
//! Spawns the full HTTP stack on a local port and drives it with reqwest.
//! Storage is PostgreSQL when `DATABASE_URL` is set, in-memory otherwise.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
