//! Chat message data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::chat::{Message, PostMessageParam},
};

/// Repository providing database operations for chat messages.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    /// Creates a new MessageRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new message.
    ///
    /// The body arrives pre-sanitized; this repository stores both the source
    /// text and its rendered HTML.
    ///
    /// # Returns
    /// - `Ok(Message)` - The created message with sender data attached
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: PostMessageParam) -> Result<Message, AppError> {
        let entity = entity::message::ActiveModel {
            chat_id: ActiveValue::Set(param.chat_id),
            sender_id: ActiveValue::Set(param.sender_id),
            body_source: ActiveValue::Set(param.body_source),
            body_html: ActiveValue::Set(param.body_html),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let sender = entity::prelude::User::find_by_id(entity.sender_id)
            .one(self.db)
            .await?
            .ok_or(AppError::NotFound("sender".to_string()))?;

        Ok(Message::from_entities(entity, sender))
    }

    /// Gets messages in a chat in chronological order.
    ///
    /// When `after_id` is given, only messages newer than that ID are
    /// returned, which lets clients poll incrementally.
    ///
    /// # Arguments
    /// - `chat_id` - Chat to read
    /// - `after_id` - Optional exclusive lower bound on message ID
    /// - `limit` - Maximum number of messages to return
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages with sender data attached
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_chat(
        &self,
        chat_id: i32,
        after_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<Message>, AppError> {
        let mut query = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id));

        if let Some(after_id) = after_id {
            query = query.filter(entity::message::Column::Id.gt(after_id));
        }

        let entities = query
            .order_by_asc(entity::message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        let sender_ids: Vec<i32> = entities.iter().map(|entity| entity.sender_id).collect();
        let senders: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(sender_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut messages = Vec::with_capacity(entities.len());
        for entity in entities {
            let sender = senders
                .get(&entity.sender_id)
                .cloned()
                .ok_or(AppError::NotFound("sender".to_string()))?;
            messages.push(Message::from_entities(entity, sender));
        }

        Ok(messages)
    }
}
