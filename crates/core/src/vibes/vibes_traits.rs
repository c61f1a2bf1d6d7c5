//! Repository traits for the vote ledger.

use async_trait::async_trait;

use crate::errors::Result;
use crate::vibes::VibeOption;

#[async_trait]
pub trait VibeRepositoryTrait: Send + Sync {
    /// Full read of the ledger.
    fn list_vibes(&self) -> Result<Vec<VibeOption>>;

    /// Atomically add one to the row whose name equals `vibe_name`.
    /// Returns `None` when no row has that name.
    async fn increment_vibe_count(&self, vibe_name: &str) -> Result<Option<VibeOption>>;
}
