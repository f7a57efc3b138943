//! Notification data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParam, GetNotificationsParam, Notification},
};

/// Repository providing database operations for user notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a notification for a user.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.kind),
            body: ActiveValue::Set(param.body),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Inserts the same notification for several users.
    ///
    /// Used when an event fans out to a rescue's whole staff roster.
    ///
    /// # Returns
    /// - `Ok(())` - All notifications inserted
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_for_users(
        &self,
        user_ids: &[i32],
        kind: &str,
        body: &str,
    ) -> Result<(), AppError> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models: Vec<entity::notification::ActiveModel> = user_ids
            .iter()
            .map(|user_id| entity::notification::ActiveModel {
                user_id: ActiveValue::Set(*user_id),
                kind: ActiveValue::Set(kind.to_string()),
                body: ActiveValue::Set(body.to_string()),
                read: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .collect();

        entity::prelude::Notification::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a user's notifications, paginated and newest first.
    ///
    /// # Arguments
    /// - `param` - User, unread-only flag, and pagination
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Notifications for the page and total count
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        param: GetNotificationsParam,
    ) -> Result<(Vec<Notification>, u64), AppError> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(param.user_id));

        if param.unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let notifications = entities.into_iter().map(Notification::from_entity).collect();

        Ok((notifications, total))
    }

    /// Finds a notification by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Notification found
    /// - `Ok(None)` - No notification with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, AppError> {
        let entity = entity::prelude::Notification::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Marks a notification as read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification updated
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_read(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .col_expr(
                entity::notification::Column::Read,
                sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks all of a user's unread notifications as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications updated
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .col_expr(
                entity::notification::Column::Read,
                sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes read notifications created before the cutoff.
    ///
    /// Used by the daily cleanup job.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_read_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Read.eq(true))
            .filter(entity::notification::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
