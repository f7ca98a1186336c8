use fleet_core::{ServiceProvider, ServiceProviderInput, ServiceProviderPatch};
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{PROVIDER_COLUMNS, new_id, now_rfc3339, row_to_service_provider};

impl Db {
    pub fn list_service_providers(&self) -> Result<Vec<ServiceProvider>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PROVIDER_COLUMNS} FROM service_providers ORDER BY name ASC, id ASC"
        ))?;
        let rows = stmt
            .query_map([], row_to_service_provider)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Active providers ordered by name, as offered by the maintenance form.
    pub fn list_active_service_providers(&self) -> Result<Vec<ServiceProvider>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {PROVIDER_COLUMNS}
            FROM service_providers
            WHERE is_active = 1
            ORDER BY name ASC, id ASC
            "#
        ))?;
        let rows = stmt
            .query_map([], row_to_service_provider)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_service_provider(&self, id: &str) -> Result<Option<ServiceProvider>> {
        self.conn
            .query_row(
                &format!("SELECT {PROVIDER_COLUMNS} FROM service_providers WHERE id = ?1"),
                params![id],
                row_to_service_provider,
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn insert_service_provider(&self, input: &ServiceProviderInput) -> Result<ServiceProvider> {
        let id = new_id();
        let now = now_rfc3339();
        let specialties = serde_json::to_string(&input.specialties)?;
        self.conn.execute(
            r#"
            INSERT INTO service_providers (
              id, name, type, address, city, state, zip_code, contact_person, contact_email,
              contact_phone, specialties, rating, is_active, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?14)
            "#,
            params![
                id,
                input.name,
                input.provider_type.as_str(),
                input.address,
                input.city,
                input.state,
                input.zip_code,
                input.contact_person,
                input.contact_email,
                input.contact_phone,
                specialties,
                input.rating,
                input.is_active,
                now,
            ],
        )?;
        self.get_service_provider(&id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub fn update_service_provider(
        &self,
        id: &str,
        patch: &ServiceProviderPatch,
    ) -> Result<Option<ServiceProvider>> {
        let Some(mut provider) = self.get_service_provider(id)? else {
            return Ok(None);
        };
        let patch = patch.clone();
        if let Some(value) = patch.name {
            provider.name = value;
        }
        if let Some(value) = patch.provider_type {
            provider.provider_type = value;
        }
        if let Some(value) = patch.address {
            provider.address = value;
        }
        if let Some(value) = patch.city {
            provider.city = value;
        }
        if let Some(value) = patch.state {
            provider.state = value;
        }
        if let Some(value) = patch.zip_code {
            provider.zip_code = value;
        }
        if let Some(value) = patch.contact_person {
            provider.contact_person = value;
        }
        if let Some(value) = patch.contact_email {
            provider.contact_email = value;
        }
        if let Some(value) = patch.contact_phone {
            provider.contact_phone = value;
        }
        if let Some(value) = patch.specialties {
            provider.specialties = value;
        }
        if let Some(value) = patch.rating {
            provider.rating = value;
        }
        if let Some(value) = patch.is_active {
            provider.is_active = value;
        }
        provider.updated_at = now_rfc3339();
        let specialties = serde_json::to_string(&provider.specialties)?;
        self.conn.execute(
            r#"
            UPDATE service_providers SET
              name = ?2, type = ?3, address = ?4, city = ?5, state = ?6, zip_code = ?7,
              contact_person = ?8, contact_email = ?9, contact_phone = ?10,
              specialties = ?11, rating = ?12, is_active = ?13, updated_at = ?14
            WHERE id = ?1
            "#,
            params![
                provider.id,
                provider.name,
                provider.provider_type.as_str(),
                provider.address,
                provider.city,
                provider.state,
                provider.zip_code,
                provider.contact_person,
                provider.contact_email,
                provider.contact_phone,
                specialties,
                provider.rating,
                provider.is_active,
                provider.updated_at,
            ],
        )?;
        Ok(Some(provider))
    }

    pub fn delete_service_provider(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM service_providers WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
