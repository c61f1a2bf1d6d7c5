use super::VibeRepositoryTrait;
use crate::constants::SUPPRESSED_VIBE_LABEL;
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::live::VibeSnapshot;
use crate::settings::SettingsServiceTrait;
use crate::vibes::{VibeOption, VoteOutcome};
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

/// Whether votes for `vibe_name` are dropped while censorship is active.
pub fn is_suppressed_category(vibe_name: &str) -> bool {
    vibe_name.contains(SUPPRESSED_VIBE_LABEL)
}

#[async_trait]
pub trait VoteServiceTrait: Send + Sync {
    /// All options, sorted by name.
    fn list_vibes(&self) -> Result<Vec<VibeOption>>;

    /// Fresh aggregate view of the ledger.
    fn snapshot(&self) -> Result<VibeSnapshot>;

    async fn cast_vote(&self, vibe_name: &str) -> Result<VoteOutcome>;
}

pub struct VoteService {
    vibe_repository: Arc<dyn VibeRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl VoteService {
    pub fn new(
        vibe_repository: Arc<dyn VibeRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        VoteService {
            vibe_repository,
            settings_service,
            event_sink,
        }
    }

    /// Reads the flag for one vote. Unreadable means "not censored".
    fn censorship_active(&self) -> bool {
        match self.settings_service.is_censorship_enabled() {
            Ok(enabled) => enabled,
            Err(e) => {
                warn!("Error fetching censorship setting for vote: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl VoteServiceTrait for VoteService {
    fn list_vibes(&self) -> Result<Vec<VibeOption>> {
        let mut vibes = self.vibe_repository.list_vibes()?;
        vibes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(vibes)
    }

    fn snapshot(&self) -> Result<VibeSnapshot> {
        Ok(VibeSnapshot::from_vibes(self.vibe_repository.list_vibes()?))
    }

    async fn cast_vote(&self, vibe_name: &str) -> Result<VoteOutcome> {
        if vibe_name.is_empty() {
            return Err(ValidationError::MissingField("Vibe name is required".to_string()).into());
        }

        if self.censorship_active() && is_suppressed_category(vibe_name) {
            info!("Censorship active: a vote for \"{}\" was blocked", vibe_name);
            return Ok(VoteOutcome::Censored);
        }

        let updated = self
            .vibe_repository
            .increment_vibe_count(vibe_name)
            .await?
            .ok_or_else(|| Error::UnknownVibe(vibe_name.to_string()))?;

        self.event_sink
            .emit(DomainEvent::vibe_count_changed(updated.name.clone()));
        Ok(VoteOutcome::Counted(updated))
    }
}
