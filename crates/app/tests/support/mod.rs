#![allow(dead_code)]

use chrono::FixedOffset;
use fleet_app::{AppConfig, AppState};
use fleet_core::{
    FuelType, MaintenanceEventInput, MaintenanceStatus, MaintenanceType, UserInput, UserRole,
    VehicleInput, VehicleStatus,
};
use tempfile::TempDir;

pub const ACTOR: &str = "admin-1";

pub struct TestApp {
    pub _dir: TempDir,
    pub state: AppState,
}

pub fn setup_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig {
        db_path: dir.path().join("app.sqlite"),
        storage_dir: dir.path().join("storage"),
        public_base_url: "http://127.0.0.1:3845/storage".to_string(),
        utc_offset: FixedOffset::east_opt(0).expect("utc"),
    };
    let state = AppState::new(config);
    state.initialize().expect("initialize");
    TestApp { _dir: dir, state }
}

pub fn vehicle_input(plate: &str) -> VehicleInput {
    VehicleInput {
        make: "Toyota".to_string(),
        model: "Hilux".to_string(),
        year: 2022,
        license_plate: plate.to_string(),
        vin: format!("VIN-{plate}"),
        color: "silver".to_string(),
        status: VehicleStatus::Active,
        assigned_driver_id: None,
        insurance_policy: None,
        insurance_expiry: None,
        last_maintenance_date: None,
        next_maintenance_date: None,
        mileage: 0,
        odometer_reading: 0,
        purchase_date: "2022-05-01".to_string(),
        fuel_type: FuelType::Diesel,
        notes: None,
    }
}

pub fn user_input(email: &str, role: UserRole) -> UserInput {
    UserInput {
        email: email.to_string(),
        first_name: "Carla".to_string(),
        last_name: "Mendoza".to_string(),
        role,
        position: None,
        department_id: None,
        phone: None,
    }
}

pub fn maintenance_input(vehicle_id: &str, title: &str, start: &str) -> MaintenanceEventInput {
    MaintenanceEventInput {
        vehicle_id: vehicle_id.to_string(),
        title: title.to_string(),
        description: String::new(),
        event_type: MaintenanceType::Scheduled,
        status: MaintenanceStatus::Pending,
        start_date: start.to_string(),
        end_date: start.to_string(),
        cost: Some(80.0),
        service_provider_id: None,
        created_by: String::new(),
    }
}
