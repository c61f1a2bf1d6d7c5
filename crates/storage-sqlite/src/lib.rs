//! SQLite storage implementation for Vibe Check.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `vibecheck-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations, including the seeded settings row and vibe options
//! - Repository implementations for settings and the vote ledger
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! ```text
//!      core (domain, traits)
//!               │
//!               ▼
//!    storage-sqlite (this crate)
//!               │
//!               ▼
//!           SQLite DB
//! ```
//!
//! Every write goes through the single writer actor in [`db::write_actor`],
//! which is what makes the vote increment atomic.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod settings;
pub mod vibes;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from vibecheck-core for convenience
pub use vibecheck_core::errors::{DatabaseError, Error, Result};
