use fleet_app::{AppError, Result, UserImage, parse_day};
use fleet_core::{
    ActivityPage, BucketReport, CalendarDay, DashboardStats, Department, Granularity,
    MaintenanceEvent, MaintenanceListing, ServiceProvider, User, Vehicle,
};

use crate::{
    ActivityRequest, AppContext, AssignDriverRequest, CalendarRequest, ChartRequest,
    DeleteRequest, DeletedResponse, DepartmentCreateRequest, DepartmentUpdateRequest, IdRequest,
    MaintenanceCreateRequest, MaintenanceListRequest, MaintenanceUpdateRequest,
    ProviderCreateRequest, ProviderUpdateRequest, ProvidersListRequest, RemovedResponse,
    SettingsPutRequest, SettingsResponse, StorageListRequest, StorageRemoveRequest, UploadRequest,
    UserCreateRequest, UserUpdateRequest, UsersListRequest, VehicleCreateRequest,
    VehicleHistoryRequest, VehicleUpdateRequest,
};

/// Actor credited in the activity feed when the caller does not name one.
pub const SYSTEM_ACTOR: &str = "system";

fn actor(actor_id: &Option<String>) -> &str {
    actor_id
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(SYSTEM_ACTOR)
}

fn require_upload_id(req: &UploadRequest) -> Result<&str> {
    req.id
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("id is required".to_string()))
}

fn parse_optional_day(value: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    value.map(parse_day).transpose()
}

pub fn vehicles_list(ctx: &AppContext) -> Result<Vec<Vehicle>> {
    ctx.app_state.services.vehicles.list()
}

pub fn vehicles_get(ctx: &AppContext, req: IdRequest) -> Result<Vehicle> {
    ctx.app_state.services.vehicles.get(&req.id)
}

pub fn vehicles_create(ctx: &AppContext, req: VehicleCreateRequest) -> Result<Vehicle> {
    ctx.app_state
        .services
        .vehicles
        .create(actor(&req.actor_id), &req.vehicle)
}

pub fn vehicles_update(ctx: &AppContext, req: VehicleUpdateRequest) -> Result<Vehicle> {
    ctx.app_state
        .services
        .vehicles
        .update(actor(&req.actor_id), &req.id, &req.patch)
}

pub fn vehicles_delete(ctx: &AppContext, req: DeleteRequest) -> Result<DeletedResponse> {
    ctx.app_state
        .services
        .vehicles
        .delete(actor(&req.actor_id), &req.id)?;
    Ok(DeletedResponse { deleted: req.id })
}

pub fn vehicles_assign_driver(ctx: &AppContext, req: AssignDriverRequest) -> Result<Vehicle> {
    ctx.app_state.services.vehicles.assign_driver(
        actor(&req.actor_id),
        &req.vehicle_id,
        req.driver_id.as_deref(),
    )
}

pub fn vehicles_upload_image(
    ctx: &AppContext,
    req: UploadRequest,
    bytes: &[u8],
) -> Result<Vehicle> {
    let id = require_upload_id(&req)?;
    ctx.app_state
        .services
        .vehicles
        .upload_image(actor(&req.actor_id), id, &req.file_name, bytes)
}

pub fn users_list(ctx: &AppContext, req: UsersListRequest) -> Result<Vec<User>> {
    ctx.app_state.services.users.list(req.role)
}

pub fn drivers_list(ctx: &AppContext) -> Result<Vec<User>> {
    ctx.app_state.services.users.drivers()
}

pub fn users_get(ctx: &AppContext, req: IdRequest) -> Result<User> {
    ctx.app_state.services.users.get(&req.id)
}

pub fn users_create(ctx: &AppContext, req: UserCreateRequest) -> Result<User> {
    ctx.app_state
        .services
        .users
        .create(actor(&req.actor_id), &req.user)
}

pub fn users_update(ctx: &AppContext, req: UserUpdateRequest) -> Result<User> {
    ctx.app_state
        .services
        .users
        .update(actor(&req.actor_id), &req.id, &req.patch)
}

pub fn users_delete(ctx: &AppContext, req: DeleteRequest) -> Result<DeletedResponse> {
    ctx.app_state
        .services
        .users
        .delete(actor(&req.actor_id), &req.id)?;
    Ok(DeletedResponse { deleted: req.id })
}

pub fn users_upload_image(ctx: &AppContext, req: UploadRequest, bytes: &[u8]) -> Result<User> {
    upload_user_image(ctx, req, UserImage::Profile, bytes)
}

pub fn users_upload_license(ctx: &AppContext, req: UploadRequest, bytes: &[u8]) -> Result<User> {
    upload_user_image(ctx, req, UserImage::License, bytes)
}

fn upload_user_image(
    ctx: &AppContext,
    req: UploadRequest,
    kind: UserImage,
    bytes: &[u8],
) -> Result<User> {
    let id = require_upload_id(&req)?;
    ctx.app_state
        .services
        .users
        .upload_image(actor(&req.actor_id), id, kind, &req.file_name, bytes)
}

pub fn departments_list(ctx: &AppContext) -> Result<Vec<Department>> {
    ctx.app_state.services.departments.list()
}

pub fn departments_get(ctx: &AppContext, req: IdRequest) -> Result<Department> {
    ctx.app_state.services.departments.get(&req.id)
}

pub fn departments_create(ctx: &AppContext, req: DepartmentCreateRequest) -> Result<Department> {
    ctx.app_state
        .services
        .departments
        .create(actor(&req.actor_id), &req.department)
}

pub fn departments_update(ctx: &AppContext, req: DepartmentUpdateRequest) -> Result<Department> {
    ctx.app_state
        .services
        .departments
        .update(actor(&req.actor_id), &req.id, &req.department)
}

pub fn departments_delete(ctx: &AppContext, req: DeleteRequest) -> Result<DeletedResponse> {
    ctx.app_state
        .services
        .departments
        .delete(actor(&req.actor_id), &req.id)?;
    Ok(DeletedResponse { deleted: req.id })
}

pub fn providers_list(
    ctx: &AppContext,
    req: ProvidersListRequest,
) -> Result<Vec<ServiceProvider>> {
    if req.active_only {
        ctx.app_state.services.providers.list_active()
    } else {
        ctx.app_state.services.providers.list()
    }
}

pub fn providers_get(ctx: &AppContext, req: IdRequest) -> Result<ServiceProvider> {
    ctx.app_state.services.providers.get(&req.id)
}

pub fn providers_create(ctx: &AppContext, req: ProviderCreateRequest) -> Result<ServiceProvider> {
    ctx.app_state
        .services
        .providers
        .create(actor(&req.actor_id), &req.provider)
}

pub fn providers_update(ctx: &AppContext, req: ProviderUpdateRequest) -> Result<ServiceProvider> {
    ctx.app_state
        .services
        .providers
        .update(actor(&req.actor_id), &req.id, &req.patch)
}

pub fn providers_delete(ctx: &AppContext, req: DeleteRequest) -> Result<DeletedResponse> {
    ctx.app_state
        .services
        .providers
        .delete(actor(&req.actor_id), &req.id)?;
    Ok(DeletedResponse { deleted: req.id })
}

pub fn maintenance_list(
    ctx: &AppContext,
    req: MaintenanceListRequest,
) -> Result<Vec<MaintenanceListing>> {
    ctx.app_state.services.maintenance.list(&req.query)
}

pub fn maintenance_history(
    ctx: &AppContext,
    req: VehicleHistoryRequest,
) -> Result<Vec<MaintenanceListing>> {
    ctx.app_state.services.maintenance.history(&req.vehicle_id)
}

pub fn maintenance_get(ctx: &AppContext, req: IdRequest) -> Result<MaintenanceEvent> {
    ctx.app_state.services.maintenance.get(&req.id)
}

pub fn maintenance_create(
    ctx: &AppContext,
    req: MaintenanceCreateRequest,
) -> Result<MaintenanceEvent> {
    ctx.app_state
        .services
        .maintenance
        .create(actor(&req.actor_id), &req.event)
}

pub fn maintenance_update(
    ctx: &AppContext,
    req: MaintenanceUpdateRequest,
) -> Result<MaintenanceEvent> {
    ctx.app_state
        .services
        .maintenance
        .update(actor(&req.actor_id), &req.id, &req.patch)
}

pub fn maintenance_delete(ctx: &AppContext, req: DeleteRequest) -> Result<DeletedResponse> {
    ctx.app_state
        .services
        .maintenance
        .delete(actor(&req.actor_id), &req.id)?;
    Ok(DeletedResponse { deleted: req.id })
}

pub fn dashboard_stats(ctx: &AppContext) -> Result<DashboardStats> {
    ctx.app_state.services.dashboard.stats()
}

pub fn maintenance_chart(ctx: &AppContext, req: ChartRequest) -> Result<BucketReport> {
    let reference = parse_optional_day(req.reference_date.as_deref())?;
    let granularity = req.granularity.unwrap_or(Granularity::Month);
    ctx.app_state
        .services
        .dashboard
        .maintenance_chart(granularity, reference)
}

pub fn maintenance_calendar(ctx: &AppContext, req: CalendarRequest) -> Result<Vec<CalendarDay>> {
    let month = parse_optional_day(req.month.as_deref())?;
    ctx.app_state.services.dashboard.calendar(month)
}

pub fn activity_list(ctx: &AppContext, req: ActivityRequest) -> Result<ActivityPage> {
    ctx.app_state.services.activity.list(&req.params)
}

pub fn settings_get(ctx: &AppContext) -> Result<SettingsResponse> {
    let settings = ctx.app_state.services.settings.get()?;
    Ok(settings_response(ctx, settings))
}

pub fn settings_put(ctx: &AppContext, req: SettingsPutRequest) -> Result<SettingsResponse> {
    let logo_url = req
        .logo_url
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let settings = ctx.app_state.services.settings.update(logo_url)?;
    Ok(settings_response(ctx, settings))
}

pub fn settings_upload_logo(
    ctx: &AppContext,
    req: UploadRequest,
    bytes: &[u8],
) -> Result<SettingsResponse> {
    let settings = ctx
        .app_state
        .services
        .settings
        .upload_logo(&req.file_name, bytes)?;
    Ok(settings_response(ctx, settings))
}

fn settings_response(ctx: &AppContext, settings: fleet_app::SettingsSnapshot) -> SettingsResponse {
    SettingsResponse {
        settings,
        db_path: ctx.app_state.config.db_path.to_string_lossy().to_string(),
        storage_dir: ctx
            .app_state
            .config
            .storage_dir
            .to_string_lossy()
            .to_string(),
        app_data_dir: ctx.app_data_dir.to_string_lossy().to_string(),
    }
}

pub fn storage_list(ctx: &AppContext, req: StorageListRequest) -> Result<Vec<fleet_app::FileRef>> {
    ctx.app_state.services.storage.list(&req.prefix)
}

pub fn storage_remove(ctx: &AppContext, req: StorageRemoveRequest) -> Result<RemovedResponse> {
    ctx.app_state.services.storage.remove(&req.paths)?;
    Ok(RemovedResponse {
        removed: req.paths.len(),
    })
}
