pub mod overall;
pub mod vibes_model;
pub mod vibes_service;
pub mod vibes_traits;

pub use overall::{OverallVibe, VibeShare, VibeSummary};
pub use vibes_model::*;
pub use vibes_service::{is_suppressed_category, VoteService, VoteServiceTrait};
pub use vibes_traits::VibeRepositoryTrait;
