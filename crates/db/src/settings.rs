use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};

const LOGO_URL_KEY: &str = "logo_url";

impl Db {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM app_setting WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO app_setting (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    pub fn clear_setting(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM app_setting WHERE key = ?1", params![key])?;
        Ok(())
    }

    pub fn get_logo_url(&self) -> Result<Option<String>> {
        self.get_setting(LOGO_URL_KEY)
    }

    pub fn set_logo_url(&self, url: Option<&str>) -> Result<()> {
        match url {
            Some(url) => self.set_setting(LOGO_URL_KEY, url),
            None => self.clear_setting(LOGO_URL_KEY),
        }
    }
}
