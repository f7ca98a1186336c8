use fleet_core::{ActivityAction, ActivityEntity, User, UserInput, UserPatch, UserRole};
use fleet_db::Db;

use crate::error::{AppError, Result};
use crate::services::{SharedConfig, SharedStore, not_found, open_db, record_activity};
use crate::validation;

const ENTITY: ActivityEntity = ActivityEntity::User;

/// Which user image an upload replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserImage {
    Profile,
    License,
}

impl UserImage {
    fn prefix(self) -> &'static str {
        match self {
            UserImage::Profile => "users",
            UserImage::License => "licenses",
        }
    }
}

#[derive(Clone)]
pub struct UsersService {
    config: SharedConfig,
    store: SharedStore,
}

impl UsersService {
    pub(super) fn new(config: SharedConfig, store: SharedStore) -> Self {
        Self { config, store }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn list(&self, role: Option<UserRole>) -> Result<Vec<User>> {
        Ok(self.db()?.list_users(role)?)
    }

    pub fn drivers(&self) -> Result<Vec<User>> {
        self.list(Some(UserRole::Driver))
    }

    pub fn get(&self, id: &str) -> Result<User> {
        self.db()?.get_user(id)?.ok_or_else(|| not_found(ENTITY, id))
    }

    pub fn create(&self, actor: &str, input: &UserInput) -> Result<User> {
        validation::user_input(input)?;
        let db = self.db()?;
        ensure_email_free(&db, &input.email, None)?;
        if let Some(department_id) = input.department_id.as_deref() {
            ensure_department(&db, department_id)?;
        }
        let user = db.insert_user(input)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Create,
            ENTITY,
            &user.id,
            format!("Added {} {}", user.role, user.full_name()),
        );
        Ok(user)
    }

    pub fn update(&self, actor: &str, id: &str, patch: &UserPatch) -> Result<User> {
        validation::user_patch(patch)?;
        let db = self.db()?;
        if let Some(email) = patch.email.as_deref() {
            ensure_email_free(&db, email, Some(id))?;
        }
        if let Some(Some(department_id)) = patch.department_id.as_ref() {
            ensure_department(&db, department_id)?;
        }
        let user = db
            .update_user(id, patch)?
            .ok_or_else(|| not_found(ENTITY, id))?;
        record_activity(
            &db,
            actor,
            ActivityAction::Update,
            ENTITY,
            id,
            format!("Updated {}", user.full_name()),
        );
        Ok(user)
    }

    pub fn delete(&self, actor: &str, id: &str) -> Result<()> {
        let db = self.db()?;
        let user = db.get_user(id)?.ok_or_else(|| not_found(ENTITY, id))?;
        db.delete_user(id)?;
        record_activity(
            &db,
            actor,
            ActivityAction::Delete,
            ENTITY,
            id,
            format!("Removed {}", user.full_name()),
        );
        Ok(())
    }

    /// Stores a profile or license image and records its URL on the user.
    pub fn upload_image(
        &self,
        actor: &str,
        user_id: &str,
        kind: UserImage,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<User> {
        validation::require_text("file name", file_name)?;
        let db = self.db()?;
        if db.get_user(user_id)?.is_none() {
            return Err(not_found(ENTITY, user_id));
        }
        let url = self.store.upload(
            &format!("{}/{}/{}", kind.prefix(), user_id, file_name),
            bytes,
        )?;
        match kind {
            UserImage::Profile => db.set_user_images(user_id, Some(&url), None)?,
            UserImage::License => db.set_user_images(user_id, None, Some(&url))?,
        };
        record_activity(
            &db,
            actor,
            ActivityAction::Update,
            ENTITY,
            user_id,
            format!("Uploaded {} image {}", kind.prefix(), file_name),
        );
        db.get_user(user_id)?.ok_or_else(|| not_found(ENTITY, user_id))
    }
}

fn ensure_email_free(db: &Db, email: &str, current_id: Option<&str>) -> Result<()> {
    if let Some(existing) = db.get_user_by_email(email)?
        && Some(existing.id.as_str()) != current_id
    {
        return Err(AppError::InvalidInput(format!(
            "email {} is already registered",
            email
        )));
    }
    Ok(())
}

fn ensure_department(db: &Db, department_id: &str) -> Result<()> {
    if db.get_department(department_id)?.is_none() {
        return Err(AppError::InvalidInput(format!(
            "department {} does not exist",
            department_id
        )));
    }
    Ok(())
}
