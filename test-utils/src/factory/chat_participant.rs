//! Chat participant factory for creating test chat membership entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chat participants.
pub struct ChatParticipantFactory<'a> {
    db: &'a DatabaseConnection,
    chat_id: i32,
    user_id: i32,
    last_read_at: Option<DateTime<Utc>>,
}

impl<'a> ChatParticipantFactory<'a> {
    /// Creates a new ChatParticipantFactory with default values.
    ///
    /// Defaults:
    /// - last_read_at: `None` (nothing read yet)
    pub fn new(db: &'a DatabaseConnection, chat_id: i32, user_id: i32) -> Self {
        Self {
            db,
            chat_id,
            user_id,
            last_read_at: None,
        }
    }

    /// Sets the read receipt timestamp.
    pub fn last_read_at(mut self, last_read_at: DateTime<Utc>) -> Self {
        self.last_read_at = Some(last_read_at);
        self
    }

    /// Builds and inserts the chat participant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::chat_participant::Model)` - Created participant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::chat_participant::Model, DbErr> {
        entity::chat_participant::ActiveModel {
            chat_id: ActiveValue::Set(self.chat_id),
            user_id: ActiveValue::Set(self.user_id),
            last_read_at: ActiveValue::Set(self.last_read_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chat participant with default values.
///
/// Shorthand for `ChatParticipantFactory::new(db, chat_id, user_id).build().await`.
pub async fn create_chat_participant(
    db: &DatabaseConnection,
    chat_id: i32,
    user_id: i32,
) -> Result<entity::chat_participant::Model, DbErr> {
    ChatParticipantFactory::new(db, chat_id, user_id).build().await
}
