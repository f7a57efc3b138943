//! Notification delivery and inbox access.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{GetNotificationsParam, PaginatedNotifications},
};

/// Service providing business logic for the notification inbox.
pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's notifications, newest first.
    pub async fn get_notifications(
        &self,
        param: GetNotificationsParam,
    ) -> Result<PaginatedNotifications, AppError> {
        let page = param.page;
        let per_page = param.per_page;
        let (notifications, total) = NotificationRepository::new(self.db)
            .get_paginated(param)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedNotifications {
            notifications,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Marks one of the user's notifications as read.
    ///
    /// Another user's notification is reported as missing rather than
    /// forbidden.
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked read
    /// - `Err(AppError::NotFound)` - Missing or not the caller's
    pub async fn mark_read(&self, user_id: i32, notification_id: i32) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);
        let Some(notification) = notification_repo.find_by_id(notification_id).await? else {
            return Err(AppError::NotFound("notification".to_string()));
        };
        if notification.user_id != user_id {
            return Err(AppError::NotFound("notification".to_string()));
        }

        notification_repo.mark_read(notification_id).await
    }

    /// Marks every unread notification of the user as read.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<(), AppError> {
        NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn mark_read_requires_ownership() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Notification)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::create_user(db).await?;
        let stranger = factory::create_user(db).await?;
        let notification = factory::create_notification(db, owner.id).await?;

        let service = NotificationService::new(db);
        let result = service.mark_read(stranger.id, notification.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        service.mark_read(owner.id, notification.id).await?;

        let (unread, _) = NotificationRepository::new(db)
            .get_paginated(GetNotificationsParam {
                user_id: owner.id,
                unread_only: true,
                page: 0,
                per_page: 10,
            })
            .await?;
        assert!(unread.is_empty());

        Ok(())
    }
}
