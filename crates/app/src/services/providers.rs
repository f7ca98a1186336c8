use fleet_core::{
    ActivityAction, ActivityEntity, ServiceProvider, ServiceProviderInput, ServiceProviderPatch,
};
use fleet_db::Db;

use crate::error::Result;
use crate::services::{SharedConfig, not_found, open_db, record_activity};
use crate::validation;

const ENTITY: ActivityEntity = ActivityEntity::ServiceProvider;

#[derive(Clone)]
pub struct ProvidersService {
    config: SharedConfig,
}

impl ProvidersService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn list(&self) -> Result<Vec<ServiceProvider>> {
        Ok(self.db()?.list_service_providers()?)
    }

    pub fn list_active(&self) -> Result<Vec<ServiceProvider>> {
        Ok(self.db()?.list_active_service_providers()?)
    }

    pub fn get(&self, id: &str) -> Result<ServiceProvider> {
        self.db()?
            .get_service_provider(id)?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub fn create(&self, actor: &str, input: &ServiceProviderInput) -> Result<ServiceProvider> {
        validation::provider_input(input)?;
        let db = self.db()?;
        let provider = db.insert_service_provider(input)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Create,
            ENTITY,
            &provider.id,
            format!("Added service provider {}", provider.name),
        );
        Ok(provider)
    }

    pub fn update(
        &self,
        actor: &str,
        id: &str,
        patch: &ServiceProviderPatch,
    ) -> Result<ServiceProvider> {
        validation::provider_patch(patch)?;
        let db = self.db()?;
        let provider = db
            .update_service_provider(id, patch)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        record_activity(
            &db,
            actor,
            ActivityAction::Update,
            ENTITY,
            id,
            format!("Updated service provider {}", provider.name),
        );
        Ok(provider)
    }

    pub fn delete(&self, actor: &str, id: &str) -> Result<()> {
        let db = self.db()?;
        let provider = db
            .get_service_provider(id)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        db.delete_service_provider(id)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Delete,
            ENTITY,
            id,
            format!("Removed service provider {}", provider.name),
        );
        Ok(())
    }
}
