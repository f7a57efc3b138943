//! Notification domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::notification::{NotificationDto, PaginatedNotificationsDto};

/// Persisted in-app notification for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    /// Event kind, e.g. `application.approved` or `application.reminder`.
    pub kind: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a notification domain model.
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            body: entity.body,
            read: entity.read,
            created_at: entity.created_at,
        }
    }

    /// Converts the notification domain model to a DTO for API responses.
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            body: self.body,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub kind: String,
    pub body: String,
}

/// Parameters for a user's notification listing.
#[derive(Debug, Clone)]
pub struct GetNotificationsParam {
    pub user_id: i32,
    /// When true, read notifications are excluded.
    pub unread_only: bool,
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of notifications with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedNotifications {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNotifications {
    /// Converts the paginated notifications domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(|n| n.into_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
