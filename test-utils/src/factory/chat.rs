//! Chat factory for creating test chat entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chats.
///
/// Chats belong to a rescue and may optionally be linked to an application.
pub struct ChatFactory<'a> {
    db: &'a DatabaseConnection,
    rescue_id: i32,
    application_id: Option<i32>,
}

impl<'a> ChatFactory<'a> {
    /// Creates a new ChatFactory with default values.
    ///
    /// Defaults:
    /// - application_id: `None`
    pub fn new(db: &'a DatabaseConnection, rescue_id: i32) -> Self {
        Self {
            db,
            rescue_id,
            application_id: None,
        }
    }

    /// Links the chat to an application.
    pub fn application_id(mut self, application_id: i32) -> Self {
        self.application_id = Some(application_id);
        self
    }

    /// Builds and inserts the chat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::chat::Model)` - Created chat entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::chat::Model, DbErr> {
        let now = Utc::now();
        entity::chat::ActiveModel {
            rescue_id: ActiveValue::Set(self.rescue_id),
            application_id: ActiveValue::Set(self.application_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chat with default values.
///
/// Shorthand for `ChatFactory::new(db, rescue_id).build().await`.
pub async fn create_chat(
    db: &DatabaseConnection,
    rescue_id: i32,
) -> Result<entity::chat::Model, DbErr> {
    ChatFactory::new(db, rescue_id).build().await
}
