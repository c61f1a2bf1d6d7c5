//! SQLite storage implementation for the vote ledger.

mod model;
mod repository;

pub use model::VibeCountDB;
pub use repository::VibeRepository;

// Re-export trait from core for convenience
pub use vibecheck_core::vibes::VibeRepositoryTrait;
