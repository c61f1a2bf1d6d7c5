use super::SettingsRepositoryTrait;
use crate::constants::CENSOR_BAD_VIBES_KEY;
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Current value of the censorship flag. An absent row reads as `false`.
    fn is_censorship_enabled(&self) -> Result<bool>;

    /// Overwrite the censorship flag and return the stored value.
    async fn set_censorship(&self, enabled: bool) -> Result<bool>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl SettingsService {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        SettingsService {
            settings_repository,
            event_sink,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn is_censorship_enabled(&self) -> Result<bool> {
        let setting = self.settings_repository.get_setting(CENSOR_BAD_VIBES_KEY)?;
        Ok(setting.map(|s| s.value).unwrap_or(false))
    }

    async fn set_censorship(&self, enabled: bool) -> Result<bool> {
        let stored = self
            .settings_repository
            .update_setting(CENSOR_BAD_VIBES_KEY, enabled)
            .await?
            .ok_or_else(|| Error::SettingMissing(CENSOR_BAD_VIBES_KEY.to_string()))?;

        debug!("Setting {} is now {}", stored.key, stored.value);
        self.event_sink
            .emit(DomainEvent::setting_changed(stored.key, stored.value));
        Ok(stored.value)
    }
}
