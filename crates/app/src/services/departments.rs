use fleet_core::{ActivityAction, ActivityEntity, Department, DepartmentInput};
use fleet_db::Db;

use crate::error::Result;
use crate::services::{SharedConfig, not_found, open_db, record_activity};
use crate::validation;

const ENTITY: ActivityEntity = ActivityEntity::Department;

#[derive(Clone)]
pub struct DepartmentsService {
    config: SharedConfig,
}

impl DepartmentsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn list(&self) -> Result<Vec<Department>> {
        Ok(self.db()?.list_departments()?)
    }

    pub fn get(&self, id: &str) -> Result<Department> {
        self.db()?
            .get_department(id)?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub fn create(&self, actor: &str, input: &DepartmentInput) -> Result<Department> {
        validation::department_input(input)?;
        let db = self.db()?;
        let department = db.insert_department(input)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Create,
            ENTITY,
            &department.id,
            format!("Added department {}", department.name),
        );
        Ok(department)
    }

    pub fn update(&self, actor: &str, id: &str, input: &DepartmentInput) -> Result<Department> {
        validation::department_input(input)?;
        let db = self.db()?;
        let department = db
            .update_department(id, input)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        record_activity(
            &db,
            actor,
            ActivityAction::Update,
            ENTITY,
            id,
            format!("Updated department {}", department.name),
        );
        Ok(department)
    }

    pub fn delete(&self, actor: &str, id: &str) -> Result<()> {
        let db = self.db()?;
        let department = db.get_department(id)?.ok_or_else(|| not_found(ENTITY, id))?;
        db.delete_department(id)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Delete,
            ENTITY,
            id,
            format!("Removed department {}", department.name),
        );
        Ok(())
    }
}
