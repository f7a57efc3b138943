//! Application factory for creating test adoption application entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test adoption applications.
///
/// Applications reference an existing pet and applicant user, so both IDs are
/// required at construction.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    pet_id: i32,
    user_id: i32,
    status: String,
    message: String,
    reminded_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - status: `"pending"`
    /// - message: `"Application {id}"` where id is auto-incremented
    /// - reminded_at: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, pet_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            pet_id,
            user_id,
            status: "pending".to_string(),
            message: format!("Application {}", id),
            reminded_at: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the status (stored string form, e.g. `"approved"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the applicant's note.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the reminder timestamp.
    pub fn reminded_at(mut self, reminded_at: DateTime<Utc>) -> Self {
        self.reminded_at = Some(reminded_at);
        self
    }

    /// Sets the creation timestamp, for tests that need aged applications.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the application entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::application::Model)` - Created application entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            pet_id: ActiveValue::Set(self.pet_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set(self.message),
            reminded_at: ActiveValue::Set(self.reminded_at),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending application with default values.
///
/// Shorthand for `ApplicationFactory::new(db, pet_id, user_id).build().await`.
pub async fn create_application(
    db: &DatabaseConnection,
    pet_id: i32,
    user_id: i32,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, pet_id, user_id).build().await
}
