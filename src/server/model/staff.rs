//! Staff membership domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::rescue::StaffMemberDto;

/// A user with elevated permissions scoped to one rescue.
///
/// Carries the linked user's name and email so staff lists don't need a
/// second lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub id: i32,
    pub rescue_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Coordinators additionally manage the rescue's staff and profile.
    pub coordinator: bool,
    pub created_at: DateTime<Utc>,
}

impl StaffMember {
    /// Builds the domain model from a staff row and its joined user row.
    pub fn from_entities(
        entity: entity::staff_member::Model,
        user: entity::user::Model,
    ) -> Self {
        Self {
            id: entity.id,
            rescue_id: entity.rescue_id,
            user_id: entity.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            coordinator: entity.coordinator,
            created_at: entity.created_at,
        }
    }

    /// Converts the staff member domain model to a DTO for API responses.
    pub fn into_dto(self) -> StaffMemberDto {
        StaffMemberDto {
            id: self.id,
            rescue_id: self.rescue_id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            coordinator: self.coordinator,
            created_at: self.created_at,
        }
    }
}

/// Parameters for adding a staff member to a rescue.
#[derive(Debug, Clone)]
pub struct AddStaffParam {
    pub rescue_id: i32,
    pub user_id: i32,
    pub coordinator: bool,
}
