use fleet_db::Db;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::services::{SharedConfig, SharedStore, open_db};
use crate::validation;

/// Snapshot of institution settings stored in the DB.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsSnapshot {
    pub logo_url: Option<String>,
}

#[derive(Clone)]
pub struct SettingsService {
    config: SharedConfig,
    store: SharedStore,
}

impl SettingsService {
    pub(super) fn new(config: SharedConfig, store: SharedStore) -> Self {
        Self { config, store }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn get(&self) -> Result<SettingsSnapshot> {
        Ok(SettingsSnapshot {
            logo_url: self.db()?.get_logo_url()?,
        })
    }

    pub fn update(&self, logo_url: Option<&str>) -> Result<SettingsSnapshot> {
        self.db()?.set_logo_url(logo_url)?;
        self.get()
    }

    /// Replaces the institution logo with a file stored under `logos/`.
    pub fn upload_logo(&self, file_name: &str, bytes: &[u8]) -> Result<SettingsSnapshot> {
        validation::require_text("file name", file_name)?;
        let url = self.store.upload(&format!("logos/{}", file_name), bytes)?;
        self.db()?.set_logo_url(Some(&url))?;
        info!(url, "updated institution logo");
        self.get()
    }
}
