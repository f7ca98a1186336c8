pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod startup;
pub mod storage;
pub mod util;
mod validation;

pub use app::{AppConfig, AppState};
pub use config::{ActivityParams, MaintenanceQuery};
pub use error::{ApiError, AppError, Result};
pub use services::{AppServices, SettingsSnapshot, UserImage};
pub use startup::{AppPaths, ensure_app_data_dir};
pub use storage::{FileRef, LocalObjectStore, ObjectStore, StorageError};
pub use util::time::{normalize_timestamp, parse_day, today_in};
