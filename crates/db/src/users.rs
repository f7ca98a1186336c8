use fleet_core::{User, UserInput, UserPatch, UserRole};
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{USER_COLUMNS, new_id, now_rfc3339, row_to_user};

impl Db {
    pub fn list_users(&self, role: Option<UserRole>) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE ?1 IS NULL OR role = ?1
            ORDER BY last_name ASC, first_name ASC, id ASC
            "#
        ))?;
        let rows = stmt
            .query_map(params![role.map(|role| role.as_str())], row_to_user)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![id],
                row_to_user,
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
                params![email],
                row_to_user,
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn insert_user(&self, input: &UserInput) -> Result<User> {
        let id = new_id();
        let now = now_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO users (
              id, email, first_name, last_name, role, position, department_id, phone,
              image_url, license_image_url, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, NULL, NULL, ?9, ?9)
            "#,
            params![
                id,
                input.email,
                input.first_name,
                input.last_name,
                input.role.as_str(),
                input.position.map(|position| position.as_str()),
                input.department_id,
                input.phone,
                now,
            ],
        )?;
        self.get_user(&id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub fn update_user(&self, id: &str, patch: &UserPatch) -> Result<Option<User>> {
        let Some(mut user) = self.get_user(id)? else {
            return Ok(None);
        };
        let patch = patch.clone();
        if let Some(value) = patch.email {
            user.email = value;
        }
        if let Some(value) = patch.first_name {
            user.first_name = value;
        }
        if let Some(value) = patch.last_name {
            user.last_name = value;
        }
        if let Some(value) = patch.role {
            user.role = value;
        }
        if let Some(value) = patch.position {
            user.position = value;
        }
        if let Some(value) = patch.department_id {
            user.department_id = value;
        }
        if let Some(value) = patch.phone {
            user.phone = value;
        }
        user.updated_at = now_rfc3339();
        self.conn.execute(
            r#"
            UPDATE users SET
              email = ?2, first_name = ?3, last_name = ?4, role = ?5, position = ?6,
              department_id = ?7, phone = ?8, updated_at = ?9
            WHERE id = ?1
            "#,
            params![
                user.id,
                user.email,
                user.first_name,
                user.last_name,
                user.role.as_str(),
                user.position.map(|position| position.as_str()),
                user.department_id,
                user.phone,
                user.updated_at,
            ],
        )?;
        Ok(Some(user))
    }

    /// Updates the profile and license image URLs; `None` keeps the stored value.
    pub fn set_user_images(
        &self,
        id: &str,
        image_url: Option<&str>,
        license_image_url: Option<&str>,
    ) -> Result<bool> {
        let updated = self.conn.execute(
            r#"
            UPDATE users SET
              image_url = COALESCE(?2, image_url),
              license_image_url = COALESCE(?3, license_image_url),
              updated_at = ?4
            WHERE id = ?1
            "#,
            params![id, image_url, license_image_url, now_rfc3339()],
        )?;
        Ok(updated > 0)
    }

    pub fn delete_user(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM users WHERE role = ?1",
                params![role.as_str()],
                |row| row.get::<_, i64>(0),
            )
            .map(|value| value.max(0) as u64)
            .map_err(DbError::from)
    }
}
