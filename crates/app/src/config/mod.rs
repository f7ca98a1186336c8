use fleet_core::{MaintenanceStatus, MaintenanceType};
use fleet_db::SortOrder;
use serde::{Deserialize, Serialize};

/// Maintenance list query as received from clients. Bounds may be RFC 3339
/// timestamps or bare `YYYY-MM-DD` dates in the reporting zone.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MaintenanceQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub vehicle_id: Option<String>,
    pub service_provider_id: Option<String>,
    pub status: Option<MaintenanceStatus>,
    #[serde(rename = "type")]
    pub event_type: Option<MaintenanceType>,
    pub search: Option<String>,
    #[serde(default)]
    pub ascending: bool,
}

impl MaintenanceQuery {
    pub fn order(&self) -> SortOrder {
        if self.ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ActivityParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
