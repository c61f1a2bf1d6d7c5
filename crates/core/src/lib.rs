//! Vibe Check Core - Domain entities, services, and traits.
//!
//! This crate contains the voting and censorship logic for Vibe Check.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod admin;
pub mod constants;
pub mod errors;
pub mod events;
pub mod live;
pub mod settings;
pub mod vibes;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
