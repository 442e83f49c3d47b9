//! Database connection pool management

mod health;
mod postgres;

pub use health::PgStorageHealth;
pub use postgres::{create_pool, run_migrations};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
