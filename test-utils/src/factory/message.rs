//! Message factory for creating test chat message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chat messages.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    chat_id: i32,
    sender_id: i32,
    body_source: String,
    body_html: String,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - body_source: `"Message {id}"` where id is auto-incremented
    /// - body_html: `"<p>Message {id}</p>"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, chat_id: i32, sender_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            chat_id,
            sender_id,
            body_source: format!("Message {}", id),
            body_html: format!("<p>Message {}</p>", id),
            created_at: Utc::now(),
        }
    }

    /// Sets both the markdown source and rendered HTML body.
    pub fn body(mut self, source: impl Into<String>, html: impl Into<String>) -> Self {
        self.body_source = source.into();
        self.body_html = html.into();
        self
    }

    /// Sets the creation timestamp, for tests that need ordered messages.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            chat_id: ActiveValue::Set(self.chat_id),
            sender_id: ActiveValue::Set(self.sender_id),
            body_source: ActiveValue::Set(self.body_source),
            body_html: ActiveValue::Set(self.body_html),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values.
///
/// Shorthand for `MessageFactory::new(db, chat_id, sender_id).build().await`.
pub async fn create_message(
    db: &DatabaseConnection,
    chat_id: i32,
    sender_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, chat_id, sender_id).build().await
}
