//! Chat participant data repository.
//!
//! Participant rows record who is in a chat and how far they have read. Staff
//! get their rows lazily the first time they act in a chat for their rescue.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::server::error::AppError;

/// Repository providing database operations for chat participation.
pub struct ChatParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatParticipantRepository<'a> {
    /// Creates a new ChatParticipantRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a chat if they are not already in it.
    ///
    /// # Returns
    /// - `Ok(())` - Participant row exists after the call
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn ensure(&self, chat_id: i32, user_id: i32) -> Result<(), AppError> {
        if self.is_participant(chat_id, user_id).await? {
            return Ok(());
        }

        entity::chat_participant::ActiveModel {
            chat_id: ActiveValue::Set(chat_id),
            user_id: ActiveValue::Set(user_id),
            last_read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether a user participates in a chat.
    ///
    /// # Returns
    /// - `Ok(bool)` - True if a participant row exists
    /// - `Err(AppError::DbErr)` - Database error during count query
    pub async fn is_participant(&self, chat_id: i32, user_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::ChatParticipant::find()
            .filter(entity::chat_participant::Column::ChatId.eq(chat_id))
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records that a user has read a chat up to now.
    ///
    /// # Returns
    /// - `Ok(())` - Read marker updated
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_read(&self, chat_id: i32, user_id: i32) -> Result<(), AppError> {
        entity::prelude::ChatParticipant::update_many()
            .filter(entity::chat_participant::Column::ChatId.eq(chat_id))
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .col_expr(
                entity::chat_participant::Column::LastReadAt,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
