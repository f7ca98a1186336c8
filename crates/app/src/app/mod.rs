use std::path::PathBuf;
use std::sync::Arc;

use chrono::FixedOffset;
use fleet_core::MaintenanceScheduleAggregator;
use fleet_db::Db;
use tracing::info;

use crate::error::{AppError, Result};
use crate::services::AppServices;
use crate::storage::{LocalObjectStore, ObjectStore};

/// Paths and settings needed to run the fleet backend.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub storage_dir: PathBuf,
    pub public_base_url: String,
    /// Zone used for calendar days in charts and calendars.
    pub utc_offset: FixedOffset,
}

impl AppConfig {
    pub fn aggregator(&self) -> MaintenanceScheduleAggregator<FixedOffset> {
        MaintenanceScheduleAggregator::new(self.utc_offset)
    }
}

/// Application state shared by the HTTP server and the CLI.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(LocalObjectStore::new(
            config.storage_dir.clone(),
            config.public_base_url.clone(),
        ));
        Self::with_store(config, store)
    }

    pub fn with_store(config: AppConfig, store: Arc<dyn ObjectStore>) -> Self {
        let services = AppServices::new(&config, store);
        Self { config, services }
    }

    pub fn is_fresh_db(&self) -> bool {
        !self.config.db_path.exists()
    }

    pub fn setup_db(&self) -> Result<()> {
        setup_db(&self.config.db_path)
    }

    pub fn initialize(&self) -> Result<()> {
        let is_fresh_db = self.is_fresh_db();
        self.setup_db()
            .map_err(|err| AppError::Message(format!("initialize db: {}", err)))?;
        std::fs::create_dir_all(&self.config.storage_dir)?;
        info!(
            db = %self.config.db_path.display(),
            fresh = is_fresh_db,
            "database ready"
        );
        Ok(())
    }
}

pub fn setup_db(path: &std::path::Path) -> Result<()> {
    let mut db = Db::open(path)?;
    db.migrate()?;
    Ok(())
}
