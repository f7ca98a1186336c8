use fleet_core::{
    ActivityAction, ActivityEntity, MaintenanceEvent, MaintenanceEventInput, MaintenanceListing,
    MaintenancePatch,
};
use fleet_db::{Db, MaintenanceFilter};

use crate::config::MaintenanceQuery;
use crate::error::{AppError, Result};
use crate::services::{SharedConfig, not_found, open_db, record_activity};
use crate::util::time::normalize_timestamp;
use crate::validation;

const ENTITY: ActivityEntity = ActivityEntity::Maintenance;

#[derive(Clone)]
pub struct MaintenanceService {
    config: SharedConfig,
}

impl MaintenanceService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn list(&self, query: &MaintenanceQuery) -> Result<Vec<MaintenanceListing>> {
        let filter = self.resolve_filter(query)?;
        Ok(self.db()?.list_maintenance_events(&filter)?)
    }

    /// Every event recorded for one vehicle, newest first.
    pub fn history(&self, vehicle_id: &str) -> Result<Vec<MaintenanceListing>> {
        let db = self.db()?;
        if db.get_vehicle(vehicle_id)?.is_none() {
            return Err(not_found(ActivityEntity::Vehicle, vehicle_id));
        }
        let filter = MaintenanceFilter {
            vehicle_id: Some(vehicle_id.to_string()),
            ..MaintenanceFilter::default()
        };
        Ok(db.list_maintenance_events(&filter)?)
    }

    pub fn get(&self, id: &str) -> Result<MaintenanceEvent> {
        self.db()?
            .get_maintenance_event(id)?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub fn create(&self, actor: &str, input: &MaintenanceEventInput) -> Result<MaintenanceEvent> {
        validation::require_text("title", &input.title)?;
        validation::require_text("vehicle", &input.vehicle_id)?;
        validation::check_cost(input.cost)?;
        let mut input = input.clone();
        input.start_date = normalize_timestamp(&input.start_date, &self.config.utc_offset)?;
        input.end_date = normalize_timestamp(&input.end_date, &self.config.utc_offset)?;
        validation::check_schedule(&input.start_date, &input.end_date)?;
        if input.created_by.trim().is_empty() {
            input.created_by = actor.to_string();
        }

        let db = self.db()?;
        ensure_references(
            &db,
            Some(input.vehicle_id.as_str()),
            input.service_provider_id.as_deref(),
        )?;
        let event = db.insert_maintenance_event(&input)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Create,
            ENTITY,
            &event.id,
            format!("Scheduled {} ({})", event.title, event.event_type),
        );
        Ok(event)
    }

    pub fn update(
        &self,
        actor: &str,
        id: &str,
        patch: &MaintenancePatch,
    ) -> Result<MaintenanceEvent> {
        if let Some(title) = patch.title.as_deref() {
            validation::require_text("title", title)?;
        }
        validation::check_cost(patch.cost.flatten())?;
        let mut patch = patch.clone();
        if let Some(start) = patch.start_date.as_deref() {
            patch.start_date = Some(normalize_timestamp(start, &self.config.utc_offset)?);
        }
        if let Some(end) = patch.end_date.as_deref() {
            patch.end_date = Some(normalize_timestamp(end, &self.config.utc_offset)?);
        }

        let db = self.db()?;
        let current = db
            .get_maintenance_event(id)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        let start = patch.start_date.as_deref().unwrap_or(&current.start_date);
        let end = patch.end_date.as_deref().unwrap_or(&current.end_date);
        validation::check_schedule(start, end)?;
        ensure_references(
            &db,
            patch.vehicle_id.as_deref(),
            patch.service_provider_id.as_ref().and_then(Option::as_deref),
        )?;

        let event = db
            .update_maintenance_event(id, &patch)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        let description = match patch.status {
            Some(status) if status != current.status => {
                format!("Changed {} status to {}", event.title, status)
            }
            _ => format!("Updated {}", event.title),
        };
        record_activity(&db, actor, ActivityAction::Update, ENTITY, id, description);
        Ok(event)
    }

    pub fn delete(&self, actor: &str, id: &str) -> Result<()> {
        let db = self.db()?;
        let event = db
            .get_maintenance_event(id)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        db.delete_maintenance_event(id)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Delete,
            ENTITY,
            id,
            format!("Removed {}", event.title),
        );
        Ok(())
    }

    fn resolve_filter(&self, query: &MaintenanceQuery) -> Result<MaintenanceFilter> {
        let tz = &self.config.utc_offset;
        let start = query
            .start
            .as_deref()
            .map(|value| normalize_timestamp(value, tz))
            .transpose()?;
        let end = query
            .end
            .as_deref()
            .map(|value| normalize_timestamp(value, tz))
            .transpose()?;
        Ok(MaintenanceFilter {
            start,
            end,
            vehicle_id: query.vehicle_id.clone(),
            service_provider_id: query.service_provider_id.clone(),
            status: query.status,
            event_type: query.event_type,
            search: query.search.clone(),
            order: query.order(),
        })
    }
}

fn ensure_references(db: &Db, vehicle_id: Option<&str>, provider_id: Option<&str>) -> Result<()> {
    if let Some(vehicle_id) = vehicle_id
        && db.get_vehicle(vehicle_id)?.is_none()
    {
        return Err(AppError::InvalidInput(format!(
            "vehicle {} does not exist",
            vehicle_id
        )));
    }
    if let Some(provider_id) = provider_id
        && db.get_service_provider(provider_id)?.is_none()
    {
        return Err(AppError::InvalidInput(format!(
            "service provider {} does not exist",
            provider_id
        )));
    }
    Ok(())
}
