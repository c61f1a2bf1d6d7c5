use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::app_settings;
use vibecheck_core::errors::Result;
use vibecheck_core::settings::{Setting, SettingsRepositoryTrait};

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, setting_key: &str) -> Result<Option<Setting>> {
        let mut conn = get_connection(&self.pool)?;
        let row = app_settings::table
            .find(setting_key)
            .select(AppSettingDB::as_select())
            .first::<AppSettingDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Setting::from))
    }

    async fn update_setting(
        &self,
        setting_key: &str,
        setting_value: bool,
    ) -> Result<Option<Setting>> {
        let key = setting_key.to_string();

        self.writer
            .exec(move |conn| {
                let updated = diesel::update(app_settings::table.find(&key))
                    .set(app_settings::value.eq(setting_value))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                if updated == 0 {
                    return Ok(None);
                }

                let row = app_settings::table
                    .find(&key)
                    .select(AppSettingDB::as_select())
                    .first::<AppSettingDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(Setting::from(row)))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::migrated_db;
    use vibecheck_core::constants::CENSOR_BAD_VIBES_KEY;

    #[tokio::test]
    async fn test_censorship_row_is_seeded_off() {
        let (_dir, pool, writer) = migrated_db();
        let repo = SettingsRepository::new(pool, writer);

        let setting = repo.get_setting(CENSOR_BAD_VIBES_KEY).unwrap().unwrap();
        assert!(!setting.value);
    }

    #[tokio::test]
    async fn test_update_overwrites_existing_row() {
        let (_dir, pool, writer) = migrated_db();
        let repo = SettingsRepository::new(pool, writer);

        let stored = repo
            .update_setting(CENSOR_BAD_VIBES_KEY, true)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.value);
        assert!(repo.get_setting(CENSOR_BAD_VIBES_KEY).unwrap().unwrap().value);

        // Writing the same value again still reports the row.
        let stored = repo
            .update_setting(CENSOR_BAD_VIBES_KEY, true)
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn test_unknown_key_is_neither_read_nor_created() {
        let (_dir, pool, writer) = migrated_db();
        let repo = SettingsRepository::new(pool, writer);

        assert!(repo.get_setting("dark_mode").unwrap().is_none());
        assert!(repo.update_setting("dark_mode", true).await.unwrap().is_none());
        assert!(repo.get_setting("dark_mode").unwrap().is_none());
    }
}
