use fleet_core::{Vehicle, VehicleInput, VehiclePatch};
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{VEHICLE_COLUMNS, new_id, now_rfc3339, row_to_vehicle};

impl Db {
    pub fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles ORDER BY make ASC, model ASC, id ASC"
        ))?;
        let rows = stmt
            .query_map([], row_to_vehicle)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>> {
        self.conn
            .query_row(
                &format!("SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = ?1"),
                params![id],
                row_to_vehicle,
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn insert_vehicle(&self, input: &VehicleInput) -> Result<Vehicle> {
        let id = new_id();
        let now = now_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO vehicles (
              id, make, model, year, license_plate, vin, color, status, assigned_driver_id,
              image_url, insurance_policy, insurance_expiry, last_maintenance_date,
              next_maintenance_date, mileage, odometer_reading, purchase_date, fuel_type,
              notes, created_at, updated_at
            ) VALUES (
              ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
              ?17, ?18, ?19, ?19
            )
            "#,
            params![
                id,
                input.make,
                input.model,
                input.year,
                input.license_plate,
                input.vin,
                input.color,
                input.status.as_str(),
                input.assigned_driver_id,
                input.insurance_policy,
                input.insurance_expiry,
                input.last_maintenance_date,
                input.next_maintenance_date,
                input.mileage,
                input.odometer_reading,
                input.purchase_date,
                input.fuel_type.as_str(),
                input.notes,
                now,
            ],
        )?;
        self.get_vehicle(&id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Applies `patch` to the stored row. Returns `None` when the vehicle does not exist.
    pub fn update_vehicle(&self, id: &str, patch: &VehiclePatch) -> Result<Option<Vehicle>> {
        let Some(mut vehicle) = self.get_vehicle(id)? else {
            return Ok(None);
        };
        let patch = patch.clone();
        if let Some(value) = patch.make {
            vehicle.make = value;
        }
        if let Some(value) = patch.model {
            vehicle.model = value;
        }
        if let Some(value) = patch.year {
            vehicle.year = value;
        }
        if let Some(value) = patch.license_plate {
            vehicle.license_plate = value;
        }
        if let Some(value) = patch.vin {
            vehicle.vin = value;
        }
        if let Some(value) = patch.color {
            vehicle.color = value;
        }
        if let Some(value) = patch.status {
            vehicle.status = value;
        }
        if let Some(value) = patch.insurance_policy {
            vehicle.insurance_policy = value;
        }
        if let Some(value) = patch.insurance_expiry {
            vehicle.insurance_expiry = value;
        }
        if let Some(value) = patch.last_maintenance_date {
            vehicle.last_maintenance_date = value;
        }
        if let Some(value) = patch.next_maintenance_date {
            vehicle.next_maintenance_date = value;
        }
        if let Some(value) = patch.mileage {
            vehicle.mileage = value;
        }
        if let Some(value) = patch.odometer_reading {
            vehicle.odometer_reading = value;
        }
        if let Some(value) = patch.purchase_date {
            vehicle.purchase_date = value;
        }
        if let Some(value) = patch.fuel_type {
            vehicle.fuel_type = value;
        }
        if let Some(value) = patch.notes {
            vehicle.notes = value;
        }
        vehicle.updated_at = now_rfc3339();
        self.conn.execute(
            r#"
            UPDATE vehicles SET
              make = ?2, model = ?3, year = ?4, license_plate = ?5, vin = ?6, color = ?7,
              status = ?8, insurance_policy = ?9, insurance_expiry = ?10,
              last_maintenance_date = ?11, next_maintenance_date = ?12, mileage = ?13,
              odometer_reading = ?14, purchase_date = ?15, fuel_type = ?16, notes = ?17,
              updated_at = ?18
            WHERE id = ?1
            "#,
            params![
                vehicle.id,
                vehicle.make,
                vehicle.model,
                vehicle.year,
                vehicle.license_plate,
                vehicle.vin,
                vehicle.color,
                vehicle.status.as_str(),
                vehicle.insurance_policy,
                vehicle.insurance_expiry,
                vehicle.last_maintenance_date,
                vehicle.next_maintenance_date,
                vehicle.mileage,
                vehicle.odometer_reading,
                vehicle.purchase_date,
                vehicle.fuel_type.as_str(),
                vehicle.notes,
                vehicle.updated_at,
            ],
        )?;
        Ok(Some(vehicle))
    }

    /// Sets or clears the assigned driver. Returns false when the vehicle does not exist.
    pub fn assign_driver(&self, vehicle_id: &str, driver_id: Option<&str>) -> Result<bool> {
        let updated = self.conn.execute(
            "UPDATE vehicles SET assigned_driver_id = ?1, updated_at = ?2 WHERE id = ?3",
            params![driver_id, now_rfc3339(), vehicle_id],
        )?;
        Ok(updated > 0)
    }

    pub fn set_vehicle_image(&self, vehicle_id: &str, image_url: Option<&str>) -> Result<bool> {
        let updated = self.conn.execute(
            "UPDATE vehicles SET image_url = ?1, updated_at = ?2 WHERE id = ?3",
            params![image_url, now_rfc3339(), vehicle_id],
        )?;
        Ok(updated > 0)
    }

    pub fn delete_vehicle(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM vehicles WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn count_vehicles(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get::<_, i64>(0))
            .map(|value| value.max(0) as u64)
            .map_err(DbError::from)
    }
}
