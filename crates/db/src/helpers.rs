use chrono::{SecondsFormat, Utc};
use fleet_core::{
    ActivityAction, ActivityEntity, ActivityLog, Department, FuelType, MaintenanceEvent,
    MaintenanceListing, MaintenanceStatus, MaintenanceType, Position, ServiceProvider,
    ServiceProviderType, User, UserRole, Vehicle, VehicleStatus, vehicle_label,
};
use rusqlite::Row;
use rusqlite::types::Type;

pub(crate) const VEHICLE_COLUMNS: &str = "id, make, model, year, license_plate, vin, color, \
     status, assigned_driver_id, image_url, insurance_policy, insurance_expiry, \
     last_maintenance_date, next_maintenance_date, mileage, odometer_reading, purchase_date, \
     fuel_type, notes, created_at, updated_at";

pub(crate) const USER_COLUMNS: &str = "id, email, first_name, last_name, role, position, \
     department_id, phone, image_url, license_image_url, created_at, updated_at";

pub(crate) const DEPARTMENT_COLUMNS: &str = "id, name, description, created_at, updated_at";

pub(crate) const PROVIDER_COLUMNS: &str = "id, name, type, address, city, state, zip_code, \
     contact_person, contact_email, contact_phone, specialties, rating, is_active, created_at, \
     updated_at";

pub(crate) const MAINTENANCE_COLUMNS: &str = "m.id, m.vehicle_id, m.title, m.description, \
     m.type, m.status, m.start_date, m.end_date, m.cost, m.service_provider_id, m.created_by, \
     m.created_at, m.updated_at";

pub(crate) const ACTIVITY_COLUMNS: &str =
    "id, user_id, action, entity, entity_id, description, created_at";

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, message.into())
}

fn wire_value<T>(
    row: &Row<'_>,
    idx: usize,
    parse: fn(&str) -> Option<T>,
) -> std::result::Result<T, rusqlite::Error> {
    let value: String = row.get(idx)?;
    parse(&value).ok_or_else(|| conversion_error(idx, format!("unknown value {value}")))
}

fn optional_wire_value<T>(
    row: &Row<'_>,
    idx: usize,
    parse: fn(&str) -> Option<T>,
) -> std::result::Result<Option<T>, rusqlite::Error> {
    let value: Option<String> = row.get(idx)?;
    match value {
        Some(value) => parse(&value)
            .map(Some)
            .ok_or_else(|| conversion_error(idx, format!("unknown value {value}"))),
        None => Ok(None),
    }
}

pub(crate) fn row_to_vehicle(row: &Row<'_>) -> std::result::Result<Vehicle, rusqlite::Error> {
    Ok(Vehicle {
        id: row.get(0)?,
        make: row.get(1)?,
        model: row.get(2)?,
        year: row.get(3)?,
        license_plate: row.get(4)?,
        vin: row.get(5)?,
        color: row.get(6)?,
        status: wire_value(row, 7, VehicleStatus::parse)?,
        assigned_driver_id: row.get(8)?,
        image_url: row.get(9)?,
        insurance_policy: row.get(10)?,
        insurance_expiry: row.get(11)?,
        last_maintenance_date: row.get(12)?,
        next_maintenance_date: row.get(13)?,
        mileage: row.get(14)?,
        odometer_reading: row.get(15)?,
        purchase_date: row.get(16)?,
        fuel_type: wire_value(row, 17, FuelType::parse)?,
        notes: row.get(18)?,
        created_at: row.get(19)?,
        updated_at: row.get(20)?,
    })
}

pub(crate) fn row_to_user(row: &Row<'_>) -> std::result::Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        role: wire_value(row, 4, UserRole::parse)?,
        position: optional_wire_value(row, 5, Position::parse)?,
        department_id: row.get(6)?,
        phone: row.get(7)?,
        image_url: row.get(8)?,
        license_image_url: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

pub(crate) fn row_to_department(
    row: &Row<'_>,
) -> std::result::Result<Department, rusqlite::Error> {
    Ok(Department {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

pub(crate) fn row_to_service_provider(
    row: &Row<'_>,
) -> std::result::Result<ServiceProvider, rusqlite::Error> {
    let specialties: String = row.get(10)?;
    let specialties = serde_json::from_str::<Vec<String>>(&specialties)
        .map_err(|err| conversion_error(10, format!("invalid specialties: {err}")))?;
    Ok(ServiceProvider {
        id: row.get(0)?,
        name: row.get(1)?,
        provider_type: wire_value(row, 2, ServiceProviderType::parse)?,
        address: row.get(3)?,
        city: row.get(4)?,
        state: row.get(5)?,
        zip_code: row.get(6)?,
        contact_person: row.get(7)?,
        contact_email: row.get(8)?,
        contact_phone: row.get(9)?,
        specialties,
        rating: row.get(11)?,
        is_active: row.get(12)?,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
    })
}

pub(crate) fn row_to_maintenance_event(
    row: &Row<'_>,
) -> std::result::Result<MaintenanceEvent, rusqlite::Error> {
    Ok(MaintenanceEvent {
        id: row.get(0)?,
        vehicle_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        event_type: wire_value(row, 4, MaintenanceType::parse)?,
        status: wire_value(row, 5, MaintenanceStatus::parse)?,
        start_date: row.get(6)?,
        end_date: row.get(7)?,
        cost: row.get(8)?,
        service_provider_id: row.get(9)?,
        created_by: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

/// Expects `MAINTENANCE_COLUMNS` followed by provider name, vehicle make and model.
pub(crate) fn row_to_maintenance_listing(
    row: &Row<'_>,
) -> std::result::Result<MaintenanceListing, rusqlite::Error> {
    let event = row_to_maintenance_event(row)?;
    let make: Option<String> = row.get(14)?;
    let model: Option<String> = row.get(15)?;
    Ok(MaintenanceListing {
        event,
        service_provider_name: row.get(13)?,
        vehicle_label: vehicle_label(make.as_deref(), model.as_deref()),
    })
}

pub(crate) fn row_to_activity_log(
    row: &Row<'_>,
) -> std::result::Result<ActivityLog, rusqlite::Error> {
    Ok(ActivityLog {
        id: row.get(0)?,
        user_id: row.get(1)?,
        action: wire_value(row, 2, ActivityAction::parse)?,
        entity: wire_value(row, 3, ActivityEntity::parse)?,
        entity_id: row.get(4)?,
        description: row.get(5)?,
        created_at: row.get(6)?,
    })
}
