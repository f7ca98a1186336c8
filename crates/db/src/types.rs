use fleet_core::{MaintenanceStatus, MaintenanceType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub(crate) fn sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Query filter for maintenance listings. Bounds apply to `start_date`:
/// `start` is inclusive, `end` exclusive. Both must be normalized UTC RFC 3339.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceFilter {
    pub start: Option<String>,
    pub end: Option<String>,
    pub vehicle_id: Option<String>,
    pub service_provider_id: Option<String>,
    pub status: Option<MaintenanceStatus>,
    pub event_type: Option<MaintenanceType>,
    pub search: Option<String>,
    pub order: SortOrder,
}
