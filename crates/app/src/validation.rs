use fleet_core::{
    DepartmentInput, ServiceProviderInput, ServiceProviderPatch, UserInput, UserPatch,
    VehicleInput, VehiclePatch,
};

use crate::error::{AppError, Result};

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;
const MAX_RATING: f64 = 5.0;

fn invalid(message: impl Into<String>) -> AppError {
    AppError::InvalidInput(message.into())
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{} is required", field)));
    }
    Ok(())
}

fn optional_text(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}

fn check_year(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid(format!(
            "year must be between {} and {}",
            MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(invalid(format!("{} must not be negative", field)));
    }
    Ok(())
}

pub(crate) fn check_cost(cost: Option<f64>) -> Result<()> {
    if let Some(cost) = cost
        && !(cost.is_finite() && cost >= 0.0)
    {
        return Err(invalid("cost must not be negative"));
    }
    Ok(())
}

fn check_rating(rating: f64) -> Result<()> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(invalid("rating must be between 0 and 5"));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<()> {
    require_text("email", email)?;
    if !email.contains('@') {
        return Err(invalid("email must contain @"));
    }
    Ok(())
}

pub(crate) fn vehicle_input(input: &VehicleInput) -> Result<()> {
    require_text("make", &input.make)?;
    require_text("model", &input.model)?;
    require_text("license plate", &input.license_plate)?;
    require_text("vin", &input.vin)?;
    require_text("color", &input.color)?;
    require_text("purchase date", &input.purchase_date)?;
    check_year(input.year)?;
    check_non_negative("mileage", input.mileage)?;
    check_non_negative("odometer reading", input.odometer_reading)
}

pub(crate) fn vehicle_patch(patch: &VehiclePatch) -> Result<()> {
    optional_text("make", patch.make.as_deref())?;
    optional_text("model", patch.model.as_deref())?;
    optional_text("license plate", patch.license_plate.as_deref())?;
    optional_text("vin", patch.vin.as_deref())?;
    optional_text("color", patch.color.as_deref())?;
    optional_text("purchase date", patch.purchase_date.as_deref())?;
    if let Some(year) = patch.year {
        check_year(year)?;
    }
    if let Some(mileage) = patch.mileage {
        check_non_negative("mileage", mileage)?;
    }
    if let Some(reading) = patch.odometer_reading {
        check_non_negative("odometer reading", reading)?;
    }
    Ok(())
}

pub(crate) fn user_input(input: &UserInput) -> Result<()> {
    check_email(&input.email)?;
    require_text("first name", &input.first_name)?;
    require_text("last name", &input.last_name)
}

pub(crate) fn user_patch(patch: &UserPatch) -> Result<()> {
    if let Some(email) = patch.email.as_deref() {
        check_email(email)?;
    }
    optional_text("first name", patch.first_name.as_deref())?;
    optional_text("last name", patch.last_name.as_deref())
}

pub(crate) fn department_input(input: &DepartmentInput) -> Result<()> {
    require_text("name", &input.name)
}

pub(crate) fn provider_input(input: &ServiceProviderInput) -> Result<()> {
    require_text("name", &input.name)?;
    check_rating(input.rating)
}

pub(crate) fn provider_patch(patch: &ServiceProviderPatch) -> Result<()> {
    optional_text("name", patch.name.as_deref())?;
    if let Some(rating) = patch.rating {
        check_rating(rating)?;
    }
    Ok(())
}

/// Both values are normalized UTC RFC 3339, so string order is time order.
pub(crate) fn check_schedule(start_date: &str, end_date: &str) -> Result<()> {
    if start_date > end_date {
        return Err(invalid("start date must not be after end date"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fleet_core::{FuelType, UserRole, VehicleStatus};

    use super::*;

    fn vehicle() -> VehicleInput {
        VehicleInput {
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: 2021,
            license_plate: "1234-ABC".to_string(),
            vin: "VIN1".to_string(),
            color: "white".to_string(),
            status: VehicleStatus::Active,
            assigned_driver_id: None,
            insurance_policy: None,
            insurance_expiry: None,
            last_maintenance_date: None,
            next_maintenance_date: None,
            mileage: 0,
            odometer_reading: 0,
            purchase_date: "2021-02-01".to_string(),
            fuel_type: FuelType::Gasoline,
            notes: None,
        }
    }

    #[test]
    fn vehicle_year_and_text_are_checked() {
        assert!(vehicle_input(&vehicle()).is_ok());
        let mut input = vehicle();
        input.year = 1850;
        assert!(vehicle_input(&input).is_err());
        let mut input = vehicle();
        input.make = "  ".to_string();
        assert!(vehicle_input(&input).is_err());
        let patch = VehiclePatch {
            mileage: Some(-1),
            ..VehiclePatch::default()
        };
        assert!(vehicle_patch(&patch).is_err());
    }

    #[test]
    fn user_email_needs_at_sign() {
        let mut input = UserInput {
            email: "driver.fleet.test".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            role: UserRole::Driver,
            position: None,
            department_id: None,
            phone: None,
        };
        assert!(user_input(&input).is_err());
        input.email = "driver@fleet.test".to_string();
        assert!(user_input(&input).is_ok());
    }

    #[test]
    fn cost_rating_and_schedule_bounds() {
        assert!(check_cost(None).is_ok());
        assert!(check_cost(Some(0.0)).is_ok());
        assert!(check_cost(Some(-0.5)).is_err());
        assert!(check_cost(Some(f64::NAN)).is_err());
        assert!(check_rating(5.0).is_ok());
        assert!(check_rating(5.5).is_err());
        assert!(check_schedule("2024-03-01T09:00:00.000Z", "2024-03-01T09:00:00.000Z").is_ok());
        assert!(check_schedule("2024-03-02T09:00:00.000Z", "2024-03-01T09:00:00.000Z").is_err());
    }
}
