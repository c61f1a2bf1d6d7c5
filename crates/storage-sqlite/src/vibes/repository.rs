use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::VibeCountDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::vibe_counts;
use vibecheck_core::errors::Result;
use vibecheck_core::vibes::{VibeOption, VibeRepositoryTrait};

pub struct VibeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl VibeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        VibeRepository { pool, writer }
    }
}

#[async_trait]
impl VibeRepositoryTrait for VibeRepository {
    fn list_vibes(&self) -> Result<Vec<VibeOption>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = vibe_counts::table
            .select(VibeCountDB::as_select())
            .order(vibe_counts::name.asc())
            .load::<VibeCountDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(VibeOption::from).collect())
    }

    async fn increment_vibe_count(&self, vibe_name: &str) -> Result<Option<VibeOption>> {
        let name = vibe_name.to_string();

        self.writer
            .exec(move |conn| {
                let row = diesel::update(vibe_counts::table.filter(vibe_counts::name.eq(&name)))
                    .set(vibe_counts::count.eq(vibe_counts::count + 1_i64))
                    .returning(VibeCountDB::as_returning())
                    .get_result::<VibeCountDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                match &row {
                    Some(updated) => debug!("{} now at {}", updated.name, updated.count),
                    None => debug!("No vibe option named {:?}", name),
                }
                Ok(row.map(VibeOption::from))
            })
            .await
    }
}
