//! # setlist-db
//!
//! Storage layer implementing the repository traits from `setlist-core`.
//!
//! ## Overview
//!
//! Two backends implement the same traits:
//!
//! - PostgreSQL via SQLx (`repositories`, `models`, `mappers`, `pool`)
//! - An in-memory backend (`memory`) for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use setlist_common::DatabaseConfig;
//! use setlist_db::{create_pool, PgSongRequestRepository};
//! use setlist_core::traits::SongRequestRepository;
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     let requests = PgSongRequestRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryBackend, MemoryStorageHealth};
pub use pool::{create_pool, run_migrations, PgPool, PgStorageHealth};
pub use repositories::{
    PgArtistProfileRepository, PgEventRepository, PgGenreRepository, PgRepertoireRepository,
    PgSongRepository, PgSongRequestRepository, PgUserRepository, PgVenueProfileRepository,
};
