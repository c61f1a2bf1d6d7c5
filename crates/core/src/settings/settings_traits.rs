//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::Setting;

/// Repository trait for the key/value settings table.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting by key. `None` if the row does not exist.
    fn get_setting(&self, setting_key: &str) -> Result<Option<Setting>>;

    /// Overwrite an existing setting. `None` if the row does not exist;
    /// rows are never created here.
    async fn update_setting(&self, setting_key: &str, setting_value: bool)
        -> Result<Option<Setting>>;
}
