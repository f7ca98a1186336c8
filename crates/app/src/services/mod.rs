mod activity;
mod dashboard;
mod departments;
mod maintenance;
mod providers;
mod settings;
mod storage;
mod users;
mod vehicles;

use std::sync::Arc;

use fleet_core::{ActivityAction, ActivityEntity, ActivityLogInput};
use fleet_db::Db;
use tracing::{info, warn};

use crate::app::AppConfig;
use crate::error::{AppError, Result};
use crate::storage::ObjectStore;

pub use activity::{ActivityService, DEFAULT_PER_PAGE};
pub use dashboard::DashboardService;
pub use departments::DepartmentsService;
pub use maintenance::MaintenanceService;
pub use providers::ProvidersService;
pub use settings::{SettingsService, SettingsSnapshot};
pub use storage::StorageService;
pub use users::{UserImage, UsersService};
pub use vehicles::VehiclesService;

type SharedConfig = Arc<AppConfig>;
type SharedStore = Arc<dyn ObjectStore>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub activity: ActivityService,
    pub dashboard: DashboardService,
    pub departments: DepartmentsService,
    pub maintenance: MaintenanceService,
    pub providers: ProvidersService,
    pub settings: SettingsService,
    pub storage: StorageService,
    pub users: UsersService,
    pub vehicles: VehiclesService,
}

impl AppServices {
    pub fn new(config: &AppConfig, store: SharedStore) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            activity: ActivityService::new(shared.clone()),
            dashboard: DashboardService::new(shared.clone()),
            departments: DepartmentsService::new(shared.clone()),
            maintenance: MaintenanceService::new(shared.clone()),
            providers: ProvidersService::new(shared.clone()),
            settings: SettingsService::new(shared.clone(), store.clone()),
            storage: StorageService::new(store.clone()),
            users: UsersService::new(shared.clone(), store.clone()),
            vehicles: VehiclesService::new(shared, store),
        }
    }
}

fn open_db(config: &SharedConfig) -> Result<Db> {
    Ok(Db::open(&config.db_path)?)
}

fn not_found(entity: ActivityEntity, id: &str) -> AppError {
    AppError::NotFound(format!("{} {} not found", entity, id))
}

/// Appends an activity row. A failed write is logged and never fails the mutation.
fn record_activity(
    db: &Db,
    actor: &str,
    action: ActivityAction,
    entity: ActivityEntity,
    entity_id: &str,
    description: String,
) {
    let input = ActivityLogInput {
        user_id: actor.to_string(),
        action,
        entity,
        entity_id: Some(entity_id.to_string()),
        description: Some(description),
    };
    match db.insert_activity(&input) {
        Ok(_) => info!(%action, %entity, entity_id, actor, "recorded activity"),
        Err(err) => warn!(error = %err, %action, %entity, entity_id, "failed to record activity"),
    }
}
