use fleet_core::{
    MaintenanceEvent, MaintenanceEventInput, MaintenanceListing, MaintenancePatch,
    MaintenanceStatus, MaintenanceType,
};
use rusqlite::{OptionalExtension, params, params_from_iter};
use tracing::debug;

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{
    MAINTENANCE_COLUMNS, new_id, now_rfc3339, row_to_maintenance_event,
    row_to_maintenance_listing,
};
use crate::types::MaintenanceFilter;

fn build_filter(filter: &MaintenanceFilter) -> (String, Vec<String>) {
    let mut clauses = Vec::new();
    let mut values = Vec::new();
    let mut push = |clause: &str, value: String| {
        values.push(value);
        clauses.push(clause.replace('?', &format!("?{}", values.len())));
    };
    if let Some(start) = &filter.start {
        push("m.start_date >= ?", start.clone());
    }
    if let Some(end) = &filter.end {
        push("m.start_date < ?", end.clone());
    }
    if let Some(vehicle_id) = &filter.vehicle_id {
        push("m.vehicle_id = ?", vehicle_id.clone());
    }
    if let Some(provider_id) = &filter.service_provider_id {
        push("m.service_provider_id = ?", provider_id.clone());
    }
    if let Some(status) = filter.status {
        push("m.status = ?", status.as_str().to_string());
    }
    if let Some(event_type) = filter.event_type {
        push("m.type = ?", event_type.as_str().to_string());
    }
    if let Some(search) = filter.search.as_deref().map(str::trim)
        && !search.is_empty()
    {
        let pattern = format!("%{}%", search.to_lowercase());
        values.push(pattern);
        let idx = values.len();
        clauses.push(format!(
            "(LOWER(m.title) LIKE ?{idx} OR LOWER(m.description) LIKE ?{idx})"
        ));
    }
    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };
    (where_sql, values)
}

impl Db {
    /// Listing rows with the provider name and vehicle label joined in.
    pub fn list_maintenance_events(
        &self,
        filter: &MaintenanceFilter,
    ) -> Result<Vec<MaintenanceListing>> {
        let (where_sql, values) = build_filter(filter);
        let order = filter.order.sql();
        let sql = format!(
            r#"
            SELECT {MAINTENANCE_COLUMNS}, p.name, v.make, v.model
            FROM maintenance_events m
            LEFT JOIN service_providers p ON p.id = m.service_provider_id
            LEFT JOIN vehicles v ON v.id = m.vehicle_id
            {where_sql}
            ORDER BY m.start_date {order}, m.id {order}
            "#
        );
        debug!(filters = values.len(), "listing maintenance events");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), row_to_maintenance_listing)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Bare events for the schedule aggregator.
    pub fn list_maintenance_in_range(
        &self,
        filter: &MaintenanceFilter,
    ) -> Result<Vec<MaintenanceEvent>> {
        let (where_sql, values) = build_filter(filter);
        let order = filter.order.sql();
        let sql = format!(
            r#"
            SELECT {MAINTENANCE_COLUMNS}
            FROM maintenance_events m
            {where_sql}
            ORDER BY m.start_date {order}, m.id {order}
            "#
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), row_to_maintenance_event)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_maintenance_event(&self, id: &str) -> Result<Option<MaintenanceEvent>> {
        self.conn
            .query_row(
                &format!("SELECT {MAINTENANCE_COLUMNS} FROM maintenance_events m WHERE m.id = ?1"),
                params![id],
                row_to_maintenance_event,
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn insert_maintenance_event(
        &self,
        input: &MaintenanceEventInput,
    ) -> Result<MaintenanceEvent> {
        let id = new_id();
        let now = now_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO maintenance_events (
              id, vehicle_id, title, description, type, status, start_date, end_date, cost,
              service_provider_id, created_by, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)
            "#,
            params![
                id,
                input.vehicle_id,
                input.title,
                input.description,
                input.event_type.as_str(),
                input.status.as_str(),
                input.start_date,
                input.end_date,
                input.cost,
                input.service_provider_id,
                input.created_by,
                now,
            ],
        )?;
        self.get_maintenance_event(&id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub fn update_maintenance_event(
        &self,
        id: &str,
        patch: &MaintenancePatch,
    ) -> Result<Option<MaintenanceEvent>> {
        let Some(mut event) = self.get_maintenance_event(id)? else {
            return Ok(None);
        };
        let patch = patch.clone();
        if let Some(value) = patch.vehicle_id {
            event.vehicle_id = value;
        }
        if let Some(value) = patch.title {
            event.title = value;
        }
        if let Some(value) = patch.description {
            event.description = value;
        }
        if let Some(value) = patch.event_type {
            event.event_type = value;
        }
        if let Some(value) = patch.status {
            event.status = value;
        }
        if let Some(value) = patch.start_date {
            event.start_date = value;
        }
        if let Some(value) = patch.end_date {
            event.end_date = value;
        }
        if let Some(value) = patch.cost {
            event.cost = value;
        }
        if let Some(value) = patch.service_provider_id {
            event.service_provider_id = value;
        }
        event.updated_at = now_rfc3339();
        self.conn.execute(
            r#"
            UPDATE maintenance_events SET
              vehicle_id = ?2, title = ?3, description = ?4, type = ?5, status = ?6,
              start_date = ?7, end_date = ?8, cost = ?9, service_provider_id = ?10,
              updated_at = ?11
            WHERE id = ?1
            "#,
            params![
                event.id,
                event.vehicle_id,
                event.title,
                event.description,
                event.event_type.as_str(),
                event.status.as_str(),
                event.start_date,
                event.end_date,
                event.cost,
                event.service_provider_id,
                event.updated_at,
            ],
        )?;
        Ok(Some(event))
    }

    pub fn delete_maintenance_event(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM maintenance_events WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn count_maintenance_by_status(&self, status: MaintenanceStatus) -> Result<u64> {
        self.count_where("status = ?1", status.as_str())
    }

    pub fn count_maintenance_by_type(&self, event_type: MaintenanceType) -> Result<u64> {
        self.count_where("type = ?1", event_type.as_str())
    }

    fn count_where(&self, clause: &str, value: &str) -> Result<u64> {
        self.conn
            .query_row(
                &format!("SELECT COUNT(*) FROM maintenance_events WHERE {clause}"),
                params![value],
                |row| row.get::<_, i64>(0),
            )
            .map(|value| value.max(0) as u64)
            .map_err(DbError::from)
    }
}
