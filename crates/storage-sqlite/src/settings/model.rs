//! Database model for application settings.

use diesel::prelude::*;
use vibecheck_core::settings::Setting;

/// Database model for one key/boolean settings row.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::app_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppSettingDB {
    pub key: String,
    pub value: bool,
}

impl From<AppSettingDB> for Setting {
    fn from(db: AppSettingDB) -> Self {
        Setting {
            key: db.key,
            value: db.value,
        }
    }
}
