use serde::{Deserialize, Serialize};

pub mod schedule;

pub use schedule::{
    BucketReport, CalendarDay, DateWindow, Granularity, MaintenanceScheduleAggregator,
    ReportingBucket,
};

/// Declares a closed set of values stored and sent over the wire as fixed strings.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(MaintenanceType {
    Scheduled => "scheduled",
    Emergency => "emergency",
    Repair => "repair",
});

wire_enum!(MaintenanceStatus {
    Pending => "pending",
    InProgress => "inProgress",
    Completed => "completed",
    Cancelled => "cancelled",
});

wire_enum!(VehicleStatus {
    Active => "active",
    Maintenance => "maintenance",
    PendingMaintenance => "pendingMaintenance",
    OutOfService => "outOfService",
});

wire_enum!(FuelType {
    Gasoline => "gasoline",
    Diesel => "diesel",
    Electric => "electric",
    Hybrid => "hybrid",
});

wire_enum!(UserRole {
    Admin => "admin",
    Staff => "staff",
    Driver => "driver",
});

wire_enum!(Position {
    Ministro => "ministro",
    Viceministro => "viceministro",
    Director => "director",
    Encargado => "encargado",
    Asistente => "asistente",
    Asesor => "asesor",
    Chofer => "chofer",
});

wire_enum!(ServiceProviderType {
    Mechanic => "mechanic",
    Electrician => "electrician",
    Bodywork => "bodywork",
    General => "general",
});

wire_enum!(ActivityAction {
    Create => "create",
    Update => "update",
    Delete => "delete",
});

wire_enum!(
    /// Entity names recorded in the activity feed.
    ActivityEntity {
        Vehicle => "vehicle",
        User => "user",
        Maintenance => "maintenance",
        ServiceProvider => "service_provider",
        Department => "department",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    pub id: String,
    pub vehicle_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: MaintenanceType,
    pub status: MaintenanceStatus,
    pub start_date: String,
    pub end_date: String,
    pub cost: Option<f64>,
    pub service_provider_id: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceEventInput {
    pub vehicle_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: MaintenanceType,
    pub status: MaintenanceStatus,
    pub start_date: String,
    pub end_date: String,
    pub cost: Option<f64>,
    pub service_provider_id: Option<String>,
    pub created_by: String,
}

/// Partial update; `None` leaves the stored value untouched and `Some(None)`
/// clears a nullable column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenancePatch {
    pub vehicle_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<MaintenanceType>,
    pub status: Option<MaintenanceStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub cost: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub service_provider_id: Option<Option<String>>,
}

/// A maintenance event joined with the display names the list views show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceListing {
    #[serde(flatten)]
    pub event: MaintenanceEvent,
    pub service_provider_name: Option<String>,
    pub vehicle_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vin: String,
    pub color: String,
    pub status: VehicleStatus,
    pub assigned_driver_id: Option<String>,
    pub image_url: Option<String>,
    pub insurance_policy: Option<String>,
    pub insurance_expiry: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub next_maintenance_date: Option<String>,
    pub mileage: i64,
    pub odometer_reading: i64,
    pub purchase_date: String,
    pub fuel_type: FuelType,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleInput {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vin: String,
    pub color: String,
    pub status: VehicleStatus,
    pub assigned_driver_id: Option<String>,
    pub insurance_policy: Option<String>,
    pub insurance_expiry: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub next_maintenance_date: Option<String>,
    #[serde(default)]
    pub mileage: i64,
    #[serde(default)]
    pub odometer_reading: i64,
    pub purchase_date: String,
    pub fuel_type: FuelType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehiclePatch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub status: Option<VehicleStatus>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub insurance_policy: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub insurance_expiry: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub last_maintenance_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub next_maintenance_date: Option<Option<String>>,
    pub mileage: Option<i64>,
    pub odometer_reading: Option<i64>,
    pub purchase_date: Option<String>,
    pub fuel_type: Option<FuelType>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub position: Option<Position>,
    pub department_id: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub license_image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub position: Option<Position>,
    pub department_id: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub position: Option<Option<Position>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub department_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub phone: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: ServiceProviderType,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProviderInput {
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: ServiceProviderType,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceProviderPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<ServiceProviderType>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

/// Keeps an explicit JSON `null` apart from an absent field in patches.
mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
    pub user_id: String,
    pub action: ActivityAction,
    pub entity: ActivityEntity,
    pub entity_id: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogInput {
    pub user_id: String,
    pub action: ActivityAction,
    pub entity: ActivityEntity,
    pub entity_id: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPage {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub logs: Vec<ActivityLog>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_vehicles: u64,
    pub active_drivers: u64,
    pub pending_maintenance: u64,
    pub scheduled_services: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

pub fn vehicle_label(make: Option<&str>, model: Option<&str>) -> String {
    match (make, model) {
        (Some(make), Some(model)) => format!("{} {}", make, model),
        _ => "No vehicle assigned".to_string(),
    }
}
