use fleet_core::{ActivityLog, ActivityLogInput};
use rusqlite::params;

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{ACTIVITY_COLUMNS, now_rfc3339, row_to_activity_log};

impl Db {
    pub fn insert_activity(&self, input: &ActivityLogInput) -> Result<ActivityLog> {
        let created_at = now_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO activity_logs (user_id, action, entity, entity_id, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                input.user_id,
                input.action.as_str(),
                input.entity.as_str(),
                input.entity_id,
                input.description,
                created_at,
            ],
        )?;
        Ok(ActivityLog {
            id: self.conn.last_insert_rowid(),
            user_id: input.user_id.clone(),
            action: input.action,
            entity: input.entity,
            entity_id: input.entity_id.clone(),
            description: input.description.clone(),
            created_at,
        })
    }

    /// One page of the log, newest first. `page` is 1-based.
    pub fn list_activity(&self, page: u32, per_page: u32) -> Result<Vec<ActivityLog>> {
        let page = page.max(1);
        let offset = i64::from(page - 1) * i64::from(per_page);
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {ACTIVITY_COLUMNS}
            FROM activity_logs
            ORDER BY created_at DESC, id DESC
            LIMIT ?1 OFFSET ?2
            "#
        ))?;
        let rows = stmt
            .query_map(params![i64::from(per_page), offset], row_to_activity_log)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn count_activity(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM activity_logs", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|value| value.max(0) as u64)
            .map_err(DbError::from)
    }
}
