//! Staff membership data repository.
//!
//! Staff rows link users to the rescues they work for and carry the coordinator
//! flag that elevates their role within that rescue.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::staff::{AddStaffParam, StaffMember},
};

/// Repository providing database operations for rescue staff membership.
pub struct StaffMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffMemberRepository<'a> {
    /// Creates a new StaffMemberRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a rescue's staff roster.
    ///
    /// # Arguments
    /// - `param` - Rescue, user, and coordinator flag for the new membership
    ///
    /// # Returns
    /// - `Ok(StaffMember)` - The created membership with user data attached
    /// - `Err(AppError::DbErr)` - Database error, including the unique
    ///   violation when the user is already staff at that rescue
    pub async fn add(&self, param: AddStaffParam) -> Result<StaffMember, AppError> {
        let entity = entity::staff_member::ActiveModel {
            rescue_id: ActiveValue::Set(param.rescue_id),
            user_id: ActiveValue::Set(param.user_id),
            coordinator: ActiveValue::Set(param.coordinator),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?
            .ok_or(AppError::NotFound("staff user".to_string()))?;

        Ok(StaffMember::from_entities(entity, user))
    }

    /// Finds a staff membership for a user at a specific rescue.
    ///
    /// This is the role-resolution query: the middleware uses it to decide
    /// whether a user acts as staff or coordinator for a rescue.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - The membership row
    /// - `Ok(None)` - The user is not staff at that rescue
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_membership(
        &self,
        rescue_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::staff_member::Model>, AppError> {
        let entity = entity::prelude::StaffMember::find()
            .filter(entity::staff_member::Column::RescueId.eq(rescue_id))
            .filter(entity::staff_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Checks whether a user is already staff at a rescue.
    ///
    /// # Returns
    /// - `Ok(bool)` - True if a membership row exists
    /// - `Err(AppError::DbErr)` - Database error during count query
    pub async fn exists(&self, rescue_id: i32, user_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::StaffMember::find()
            .filter(entity::staff_member::Column::RescueId.eq(rescue_id))
            .filter(entity::staff_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all staff for a rescue, ordered by join date.
    ///
    /// # Returns
    /// - `Ok(Vec<StaffMember>)` - Staff with user data attached
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_rescue(&self, rescue_id: i32) -> Result<Vec<StaffMember>, AppError> {
        let rows = entity::prelude::StaffMember::find()
            .filter(entity::staff_member::Column::RescueId.eq(rescue_id))
            .order_by_asc(entity::staff_member::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut staff = Vec::with_capacity(rows.len());
        for (membership, user) in rows {
            let user = user.ok_or(AppError::NotFound("staff user".to_string()))?;
            staff.push(StaffMember::from_entities(membership, user));
        }

        Ok(staff)
    }

    /// Gets the user IDs of all staff at a rescue.
    ///
    /// Used when fanning out notifications to a rescue's team.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Staff user IDs
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_ids_by_rescue(&self, rescue_id: i32) -> Result<Vec<i32>, AppError> {
        let rows = entity::prelude::StaffMember::find()
            .filter(entity::staff_member::Column::RescueId.eq(rescue_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Sets the coordinator flag on a staff membership.
    ///
    /// # Returns
    /// - `Ok(Some(StaffMember))` - The updated membership
    /// - `Ok(None)` - No membership with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_coordinator(
        &self,
        id: i32,
        coordinator: bool,
    ) -> Result<Option<StaffMember>, AppError> {
        let Some(membership) = entity::prelude::StaffMember::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::staff_member::ActiveModel = membership.into();
        active_model.coordinator = ActiveValue::Set(coordinator);
        let entity = active_model.update(self.db).await?;

        let user = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?
            .ok_or(AppError::NotFound("staff user".to_string()))?;

        Ok(Some(StaffMember::from_entities(entity, user)))
    }

    /// Removes a staff membership.
    ///
    /// # Returns
    /// - `Ok(())` - Membership deleted (or no matching row found)
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::StaffMember::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
