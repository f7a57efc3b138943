//! Staff member factory for creating test staff membership entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members.
///
/// Staff members link an existing user to an existing rescue, so both IDs are
/// required at construction.
pub struct StaffMemberFactory<'a> {
    db: &'a DatabaseConnection,
    rescue_id: i32,
    user_id: i32,
    coordinator: bool,
}

impl<'a> StaffMemberFactory<'a> {
    /// Creates a new StaffMemberFactory with default values.
    ///
    /// Defaults:
    /// - coordinator: `false`
    pub fn new(db: &'a DatabaseConnection, rescue_id: i32, user_id: i32) -> Self {
        Self {
            db,
            rescue_id,
            user_id,
            coordinator: false,
        }
    }

    /// Sets whether the staff member is a coordinator.
    pub fn coordinator(mut self, coordinator: bool) -> Self {
        self.coordinator = coordinator;
        self
    }

    /// Builds and inserts the staff member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::staff_member::Model)` - Created staff member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::staff_member::Model, DbErr> {
        entity::staff_member::ActiveModel {
            rescue_id: ActiveValue::Set(self.rescue_id),
            user_id: ActiveValue::Set(self.user_id),
            coordinator: ActiveValue::Set(self.coordinator),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular (non-coordinator) staff member.
pub async fn create_staff_member(
    db: &DatabaseConnection,
    rescue_id: i32,
    user_id: i32,
) -> Result<entity::staff_member::Model, DbErr> {
    StaffMemberFactory::new(db, rescue_id, user_id).build().await
}

/// Creates a coordinator staff member.
pub async fn create_coordinator(
    db: &DatabaseConnection,
    rescue_id: i32,
    user_id: i32,
) -> Result<entity::staff_member::Model, DbErr> {
    StaffMemberFactory::new(db, rescue_id, user_id)
        .coordinator(true)
        .build()
        .await
}
