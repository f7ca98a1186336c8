use fleet_core::{
    ActivityAction, ActivityEntity, UserRole, Vehicle, VehicleInput, VehiclePatch,
};
use fleet_db::Db;

use crate::error::{AppError, Result};
use crate::services::{SharedConfig, SharedStore, not_found, open_db, record_activity};
use crate::validation;

const ENTITY: ActivityEntity = ActivityEntity::Vehicle;

#[derive(Clone)]
pub struct VehiclesService {
    config: SharedConfig,
    store: SharedStore,
}

impl VehiclesService {
    pub(super) fn new(config: SharedConfig, store: SharedStore) -> Self {
        Self { config, store }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn list(&self) -> Result<Vec<Vehicle>> {
        Ok(self.db()?.list_vehicles()?)
    }

    pub fn get(&self, id: &str) -> Result<Vehicle> {
        self.db()?
            .get_vehicle(id)?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub fn create(&self, actor: &str, input: &VehicleInput) -> Result<Vehicle> {
        validation::vehicle_input(input)?;
        let db = self.db()?;
        if let Some(driver_id) = input.assigned_driver_id.as_deref() {
            require_driver(&db, driver_id)?;
        }
        let vehicle = db.insert_vehicle(input)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Create,
            ENTITY,
            &vehicle.id,
            format!("Added vehicle {} {} ({})", vehicle.make, vehicle.model, vehicle.license_plate),
        );
        Ok(vehicle)
    }

    pub fn update(&self, actor: &str, id: &str, patch: &VehiclePatch) -> Result<Vehicle> {
        validation::vehicle_patch(patch)?;
        let db = self.db()?;
        let vehicle = db
            .update_vehicle(id, patch)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        record_activity(
            &db,
            actor,
            ActivityAction::Update,
            ENTITY,
            id,
            format!("Updated vehicle {}", vehicle.license_plate),
        );
        Ok(vehicle)
    }

    pub fn delete(&self, actor: &str, id: &str) -> Result<()> {
        let db = self.db()?;
        let vehicle = db.get_vehicle(id)?.ok_or_else(|| not_found(ENTITY, id))?;
        db.delete_vehicle(id)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Delete,
            ENTITY,
            id,
            format!("Removed vehicle {}", vehicle.license_plate),
        );
        Ok(())
    }

    /// Sets or clears the assigned driver. Only users with the driver role qualify.
    pub fn assign_driver(
        &self,
        actor: &str,
        vehicle_id: &str,
        driver_id: Option<&str>,
    ) -> Result<Vehicle> {
        let db = self.db()?;
        if let Some(driver_id) = driver_id {
            require_driver(&db, driver_id)?;
        }
        if !db.assign_driver(vehicle_id, driver_id)? {
            return Err(not_found(ENTITY, vehicle_id));
        }
        let vehicle = db
            .get_vehicle(vehicle_id)?
            .ok_or_else(|| not_found(ENTITY, vehicle_id))?;
        let description = match driver_id {
            Some(driver_id) => format!("Assigned driver {} to {}", driver_id, vehicle.license_plate),
            None => format!("Unassigned driver from {}", vehicle.license_plate),
        };
        record_activity(&db, actor, ActivityAction::Update, ENTITY, vehicle_id, description);
        Ok(vehicle)
    }

    /// Stores a photo under `vehicles/<id>/` and points the vehicle at it.
    pub fn upload_image(
        &self,
        actor: &str,
        vehicle_id: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Vehicle> {
        validation::require_text("file name", file_name)?;
        let db = self.db()?;
        if db.get_vehicle(vehicle_id)?.is_none() {
            return Err(not_found(ENTITY, vehicle_id));
        }
        let url = self
            .store
            .upload(&format!("vehicles/{}/{}", vehicle_id, file_name), bytes)?;
        db.set_vehicle_image(vehicle_id, Some(&url))?;
        record_activity(
            &db,
            actor,
            ActivityAction::Update,
            ENTITY,
            vehicle_id,
            format!("Uploaded vehicle image {}", file_name),
        );
        db.get_vehicle(vehicle_id)?
            .ok_or_else(|| not_found(ENTITY, vehicle_id))
    }
}

fn require_driver(db: &Db, driver_id: &str) -> Result<()> {
    let user = db
        .get_user(driver_id)?
        .ok_or_else(|| AppError::InvalidInput(format!("driver {} does not exist", driver_id)))?;
    if user.role != UserRole::Driver {
        return Err(AppError::InvalidInput(format!(
            "user {} is not a driver",
            driver_id
        )));
    }
    Ok(())
}
