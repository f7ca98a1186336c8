use fleet_core::{DashboardStats, MaintenanceStatus, MaintenanceType, UserRole};

use crate::Db;
use crate::error::Result;

impl Db {
    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        Ok(DashboardStats {
            total_vehicles: self.count_vehicles()?,
            active_drivers: self.count_users_by_role(UserRole::Driver)?,
            pending_maintenance: self.count_maintenance_by_status(MaintenanceStatus::Pending)?,
            scheduled_services: self.count_maintenance_by_type(MaintenanceType::Scheduled)?,
        })
    }
}
