#![allow(dead_code)]

use std::path::PathBuf;

use fleet_core::{
    FuelType, MaintenanceEventInput, MaintenanceStatus, MaintenanceType, ServiceProviderInput,
    ServiceProviderType, UserInput, UserRole, VehicleInput, VehicleStatus,
};
use fleet_db::Db;
use tempfile::TempDir;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn make_vehicle_input(make: &str, model: &str, plate: &str) -> VehicleInput {
    VehicleInput {
        make: make.to_string(),
        model: model.to_string(),
        year: 2020,
        license_plate: plate.to_string(),
        vin: format!("VIN-{plate}"),
        color: "white".to_string(),
        status: VehicleStatus::Active,
        assigned_driver_id: None,
        insurance_policy: None,
        insurance_expiry: None,
        last_maintenance_date: None,
        next_maintenance_date: None,
        mileage: 12_000,
        odometer_reading: 12_000,
        purchase_date: "2020-01-15".to_string(),
        fuel_type: FuelType::Diesel,
        notes: None,
    }
}

pub fn make_user_input(email: &str, role: UserRole) -> UserInput {
    UserInput {
        email: email.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Rojas".to_string(),
        role,
        position: None,
        department_id: None,
        phone: None,
    }
}

pub fn make_provider_input(name: &str, is_active: bool) -> ServiceProviderInput {
    ServiceProviderInput {
        name: name.to_string(),
        provider_type: ServiceProviderType::Mechanic,
        address: String::new(),
        city: "La Paz".to_string(),
        state: String::new(),
        zip_code: String::new(),
        contact_person: String::new(),
        contact_email: String::new(),
        contact_phone: String::new(),
        specialties: vec!["brakes".to_string(), "engine".to_string()],
        rating: 4.5,
        is_active,
    }
}

pub fn make_maintenance_input(vehicle_id: &str, title: &str, start: &str) -> MaintenanceEventInput {
    MaintenanceEventInput {
        vehicle_id: vehicle_id.to_string(),
        title: title.to_string(),
        description: String::new(),
        event_type: MaintenanceType::Scheduled,
        status: MaintenanceStatus::Pending,
        start_date: start.to_string(),
        end_date: start.to_string(),
        cost: None,
        service_provider_id: None,
        created_by: "admin".to_string(),
    }
}
