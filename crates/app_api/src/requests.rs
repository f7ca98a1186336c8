use fleet_app::{ActivityParams, MaintenanceQuery};
use fleet_core::{
    DepartmentInput, Granularity, MaintenanceEventInput, MaintenancePatch, ServiceProviderInput,
    ServiceProviderPatch, UserInput, UserPatch, UserRole, VehicleInput, VehiclePatch,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct EmptyRequest {}

#[derive(Debug, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

/// Deletion of any entity. `actor_id` is the user the activity feed credits.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VehicleCreateRequest {
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub vehicle: VehicleInput,
}

#[derive(Debug, Deserialize)]
pub struct VehicleUpdateRequest {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub patch: VehiclePatch,
}

#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    pub vehicle_id: String,
    pub driver_id: Option<String>,
    #[serde(default)]
    pub actor_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UsersListRequest {
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize)]
pub struct UserCreateRequest {
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub user: UserInput,
}

#[derive(Debug, Deserialize)]
pub struct UserUpdateRequest {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub patch: UserPatch,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentCreateRequest {
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub department: DepartmentInput,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentUpdateRequest {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub department: DepartmentInput,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProvidersListRequest {
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProviderCreateRequest {
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub provider: ServiceProviderInput,
}

#[derive(Debug, Deserialize)]
pub struct ProviderUpdateRequest {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub patch: ServiceProviderPatch,
}

#[derive(Debug, Deserialize, Default)]
pub struct MaintenanceListRequest {
    #[serde(flatten)]
    pub query: MaintenanceQuery,
}

#[derive(Debug, Deserialize)]
pub struct VehicleHistoryRequest {
    pub vehicle_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MaintenanceCreateRequest {
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub event: MaintenanceEventInput,
}

#[derive(Debug, Deserialize)]
pub struct MaintenanceUpdateRequest {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(flatten)]
    pub patch: MaintenancePatch,
}

#[derive(Debug, Deserialize, Default)]
pub struct ChartRequest {
    /// `month` when absent, matching the dashboard's opening view.
    pub granularity: Option<Granularity>,
    /// `YYYY-MM-DD`; today in the reporting zone when absent.
    pub reference_date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarRequest {
    /// Any `YYYY-MM-DD` inside the wanted month.
    pub month: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ActivityRequest {
    #[serde(flatten)]
    pub params: ActivityParams,
}

#[derive(Debug, Deserialize)]
pub struct SettingsPutRequest {
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StorageListRequest {
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Deserialize)]
pub struct StorageRemoveRequest {
    pub paths: Vec<String>,
}

/// Metadata sent alongside a raw upload body.
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub file_name: String,
    #[serde(default)]
    pub actor_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
