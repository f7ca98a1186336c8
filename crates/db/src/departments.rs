use fleet_core::{Department, DepartmentInput};
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{DEPARTMENT_COLUMNS, new_id, now_rfc3339, row_to_department};

impl Db {
    pub fn list_departments(&self) -> Result<Vec<Department>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments ORDER BY name ASC"
        ))?;
        let rows = stmt
            .query_map([], row_to_department)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_department(&self, id: &str) -> Result<Option<Department>> {
        self.conn
            .query_row(
                &format!("SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE id = ?1"),
                params![id],
                row_to_department,
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn insert_department(&self, input: &DepartmentInput) -> Result<Department> {
        let id = new_id();
        let now = now_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO departments (id, name, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            "#,
            params![id, input.name, input.description, now],
        )?;
        self.get_department(&id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub fn update_department(
        &self,
        id: &str,
        input: &DepartmentInput,
    ) -> Result<Option<Department>> {
        let updated = self.conn.execute(
            "UPDATE departments SET name = ?2, description = ?3, updated_at = ?4 WHERE id = ?1",
            params![id, input.name, input.description, now_rfc3339()],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        self.get_department(id)
    }

    pub fn delete_department(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM departments WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
