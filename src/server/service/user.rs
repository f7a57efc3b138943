//! User profile and account management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{audit_log::AuditLogRepository, user::UserRepository},
    error::AppError,
    model::{
        audit::RecordAuditParam,
        user::{GetAllUsersParam, PaginatedUsers, UpdateUserParam, User},
    },
};

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("user".to_string()))
    }

    /// Retrieves all users with pagination, for admin user management.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = (total as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Updates a user's own profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn update_profile(&self, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(param)
            .await?
            .ok_or(AppError::NotFound("user".to_string()))
    }

    /// Deletes a user account on behalf of an admin.
    ///
    /// Cascading foreign keys remove the user's staff rows, applications,
    /// ratings, chat participation, and notifications. The deletion is
    /// recorded in the audit trail.
    ///
    /// # Returns
    /// - `Ok(())` - Account removed
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn delete_user(&self, actor_id: i32, user_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("user".to_string()));
        };

        user_repo.delete(user_id).await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "user.delete".to_string(),
                target_kind: "user".to_string(),
                target_id: Some(user_id),
                detail: Some(user.email),
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn delete_user_audits_and_removes() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::AuditLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::create_admin(db).await?;
        let user = factory::create_user(db).await?;

        let service = UserService::new(db);
        service.delete_user(admin.id, user.id).await?;

        let remaining = entity::prelude::User::find().count(db).await?;
        assert_eq!(remaining, 1);

        let audit_count = entity::prelude::AuditLog::find().count(db).await?;
        assert_eq!(audit_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::AuditLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        let result = service.delete_user(1, 999).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
