//! Chat data repository.
//!
//! Chats belong to a rescue and optionally reference the application that
//! prompted them. Participant rows and messages live in their own
//! repositories; this one handles the chat records themselves and the
//! enrichment needed to present them.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{self, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::chat::{Chat, ChatParticipant, OpenChatParam},
};

/// Repository providing database operations for chats.
pub struct ChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRepository<'a> {
    /// Creates a new ChatRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new chat record.
    ///
    /// The creator's participant row is added separately by the participant
    /// repository.
    ///
    /// # Returns
    /// - `Ok(model)` - The raw chat row
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: &OpenChatParam) -> Result<entity::chat::Model, AppError> {
        let now = Utc::now();
        let entity = entity::chat::ActiveModel {
            rescue_id: ActiveValue::Set(param.rescue_id),
            application_id: ActiveValue::Set(param.application_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity)
    }

    /// Finds an existing chat for the same creator, rescue, and application.
    ///
    /// Opening a chat is idempotent: if the creator already has one with the
    /// rescue about the same application, that chat is reused.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - A matching chat the creator participates in
    /// - `Ok(None)` - No matching chat
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_existing(
        &self,
        param: &OpenChatParam,
    ) -> Result<Option<entity::chat::Model>, AppError> {
        let participating = sea_query::Query::select()
            .column(entity::chat_participant::Column::ChatId)
            .from(entity::prelude::ChatParticipant)
            .and_where(
                sea_query::Expr::col(entity::chat_participant::Column::UserId)
                    .eq(param.creator_id),
            )
            .to_owned();

        let mut query = entity::prelude::Chat::find()
            .filter(entity::chat::Column::RescueId.eq(param.rescue_id))
            .filter(entity::chat::Column::Id.in_subquery(participating));

        query = match param.application_id {
            Some(application_id) => {
                query.filter(entity::chat::Column::ApplicationId.eq(application_id))
            }
            None => query.filter(entity::chat::Column::ApplicationId.is_null()),
        };

        Ok(query.one(self.db).await?)
    }

    /// Finds a chat by its primary key, without enrichment.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - The raw chat row
    /// - `Ok(None)` - No chat with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::chat::Model>, AppError> {
        let entity = entity::prelude::Chat::find_by_id(id).one(self.db).await?;

        Ok(entity)
    }

    /// Loads a chat with its rescue name and participant list attached.
    ///
    /// # Returns
    /// - `Ok(Some(Chat))` - The enriched chat
    /// - `Ok(None)` - No chat with that ID
    /// - `Err(AppError)` - Database error during enrichment
    pub async fn find_enriched(&self, id: i32) -> Result<Option<Chat>, AppError> {
        let Some(entity) = entity::prelude::Chat::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.enrich(entity).await?))
    }

    /// Gets all chats a user participates in, most recently updated first.
    ///
    /// # Returns
    /// - `Ok(Vec<Chat>)` - Enriched chats
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Chat>, AppError> {
        let participating = sea_query::Query::select()
            .column(entity::chat_participant::Column::ChatId)
            .from(entity::prelude::ChatParticipant)
            .and_where(
                sea_query::Expr::col(entity::chat_participant::Column::UserId).eq(user_id),
            )
            .to_owned();

        let entities = entity::prelude::Chat::find()
            .filter(entity::chat::Column::Id.in_subquery(participating))
            .order_by_desc(entity::chat::Column::UpdatedAt)
            .all(self.db)
            .await?;

        let mut chats = Vec::with_capacity(entities.len());
        for entity in entities {
            chats.push(self.enrich(entity).await?);
        }

        Ok(chats)
    }

    /// Gets all chats belonging to a rescue, most recently updated first.
    ///
    /// Used by staff to see every conversation at their rescue, including
    /// ones they have not joined yet.
    ///
    /// # Returns
    /// - `Ok(Vec<Chat>)` - Enriched chats
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_rescue(&self, rescue_id: i32) -> Result<Vec<Chat>, AppError> {
        let entities = entity::prelude::Chat::find()
            .filter(entity::chat::Column::RescueId.eq(rescue_id))
            .order_by_desc(entity::chat::Column::UpdatedAt)
            .all(self.db)
            .await?;

        let mut chats = Vec::with_capacity(entities.len());
        for entity in entities {
            chats.push(self.enrich(entity).await?);
        }

        Ok(chats)
    }

    /// Bumps a chat's updated timestamp, used when a message arrives so the
    /// chat rises in the user's list.
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn touch(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Chat::update_many()
            .filter(entity::chat::Column::Id.eq(id))
            .col_expr(
                entity::chat::Column::UpdatedAt,
                sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Attaches the rescue name and participant list to a chat row.
    async fn enrich(&self, entity: entity::chat::Model) -> Result<Chat, AppError> {
        let rescue = entity::prelude::Rescue::find_by_id(entity.rescue_id)
            .one(self.db)
            .await?
            .ok_or(AppError::NotFound("rescue".to_string()))?;

        let rows = entity::prelude::ChatParticipant::find()
            .filter(entity::chat_participant::Column::ChatId.eq(entity.id))
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = rows.iter().map(|row| row.user_id).collect();
        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut participants = Vec::with_capacity(rows.len());
        for row in rows {
            let user = users
                .get(&row.user_id)
                .cloned()
                .ok_or(AppError::NotFound("participant".to_string()))?;
            participants.push(ChatParticipant::from_entities(row, user));
        }

        Ok(Chat::from_entities(entity, rescue.name, participants))
    }
}
