//! Database model for vibe counters.

use diesel::prelude::*;
use vibecheck_core::vibes::VibeOption;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::vibe_counts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VibeCountDB {
    pub id: String,
    pub name: String,
    pub count: i64,
}

impl From<VibeCountDB> for VibeOption {
    fn from(db: VibeCountDB) -> Self {
        VibeOption {
            id: db.id,
            name: db.name,
            count: db.count,
        }
    }
}
