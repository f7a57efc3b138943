//! Rescue organization and staff roster management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        audit_log::AuditLogRepository, rescue::RescueRepository,
        staff_member::StaffMemberRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        audit::RecordAuditParam,
        rescue::{CreateRescueParam, PaginatedRescues, Rescue, UpdateRescueParam},
        staff::{AddStaffParam, StaffMember},
    },
    service::sanitizer,
};

/// Service providing business logic for rescues and their staff.
pub struct RescueService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RescueService<'a> {
    /// Creates a new RescueService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new rescue organization.
    ///
    /// The markdown description is sanitized and rendered at write time. The
    /// creation is recorded in the audit trail.
    ///
    /// # Returns
    /// - `Ok(Rescue)` - The created rescue
    /// - `Err(AppError::BadRequest)` - Empty name
    pub async fn create_rescue(
        &self,
        actor_id: i32,
        name: &str,
        email: &str,
        city: &str,
        description: &str,
    ) -> Result<Rescue, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("rescue name must not be empty".to_string()));
        }

        let rescue = RescueRepository::new(self.db)
            .create(CreateRescueParam {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                city: city.trim().to_string(),
                description_source: description.to_string(),
                description_html: sanitizer::render_markdown(description),
            })
            .await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "rescue.create".to_string(),
                target_kind: "rescue".to_string(),
                target_id: Some(rescue.id),
                detail: Some(rescue.name.clone()),
            })
            .await?;

        Ok(rescue)
    }

    /// Retrieves a rescue by ID.
    ///
    /// # Returns
    /// - `Ok(Rescue)` - The rescue
    /// - `Err(AppError::NotFound)` - No such rescue
    pub async fn get_rescue(&self, id: i32) -> Result<Rescue, AppError> {
        RescueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("rescue".to_string()))
    }

    /// Retrieves all rescues with pagination.
    pub async fn get_all_rescues(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedRescues, AppError> {
        let (rescues, total) = RescueRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedRescues {
            rescues,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a rescue's profile, re-rendering its description.
    ///
    /// # Returns
    /// - `Ok(Rescue)` - The updated rescue
    /// - `Err(AppError::NotFound)` - No such rescue
    pub async fn update_rescue(
        &self,
        actor_id: i32,
        id: i32,
        name: &str,
        email: &str,
        city: &str,
        description: &str,
    ) -> Result<Rescue, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("rescue name must not be empty".to_string()));
        }

        let rescue = RescueRepository::new(self.db)
            .update(UpdateRescueParam {
                id,
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                city: city.trim().to_string(),
                description_source: description.to_string(),
                description_html: sanitizer::render_markdown(description),
            })
            .await?
            .ok_or(AppError::NotFound("rescue".to_string()))?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "rescue.update".to_string(),
                target_kind: "rescue".to_string(),
                target_id: Some(rescue.id),
                detail: None,
            })
            .await?;

        Ok(rescue)
    }

    /// Removes a rescue and everything that hangs off it.
    ///
    /// # Returns
    /// - `Ok(())` - Rescue deleted
    /// - `Err(AppError::NotFound)` - No such rescue
    pub async fn delete_rescue(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        let rescue_repo = RescueRepository::new(self.db);
        let Some(rescue) = rescue_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("rescue".to_string()));
        };

        rescue_repo.delete(id).await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "rescue.delete".to_string(),
                target_kind: "rescue".to_string(),
                target_id: Some(id),
                detail: Some(rescue.name),
            })
            .await?;

        Ok(())
    }

    /// Lists a rescue's staff roster.
    pub async fn get_staff(&self, rescue_id: i32) -> Result<Vec<StaffMember>, AppError> {
        self.get_rescue(rescue_id).await?;
        StaffMemberRepository::new(self.db)
            .get_by_rescue(rescue_id)
            .await
    }

    /// Adds a user to a rescue's staff by email address.
    ///
    /// # Returns
    /// - `Ok(StaffMember)` - The new membership
    /// - `Err(AppError::NotFound)` - No account with that email, or no such rescue
    /// - `Err(AppError::BadRequest)` - User is already staff at the rescue
    pub async fn add_staff(
        &self,
        actor_id: i32,
        rescue_id: i32,
        email: &str,
        coordinator: bool,
    ) -> Result<StaffMember, AppError> {
        self.get_rescue(rescue_id).await?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&email.trim().to_lowercase())
            .await?
        else {
            return Err(AppError::NotFound("user with that email".to_string()));
        };

        let staff_repo = StaffMemberRepository::new(self.db);
        if staff_repo.exists(rescue_id, user.id).await? {
            return Err(AppError::BadRequest(
                "user is already staff at this rescue".to_string(),
            ));
        }

        let membership = staff_repo
            .add(AddStaffParam {
                rescue_id,
                user_id: user.id,
                coordinator,
            })
            .await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "staff.add".to_string(),
                target_kind: "staff_member".to_string(),
                target_id: Some(membership.id),
                detail: Some(user.email),
            })
            .await?;

        Ok(membership)
    }

    /// Sets the coordinator flag on a rescue's staff member.
    ///
    /// The member is addressed by their user id, matching the API route.
    ///
    /// # Returns
    /// - `Ok(StaffMember)` - The updated membership
    /// - `Err(AppError::NotFound)` - User is not staff at this rescue
    pub async fn set_coordinator(
        &self,
        actor_id: i32,
        rescue_id: i32,
        user_id: i32,
        coordinator: bool,
    ) -> Result<StaffMember, AppError> {
        let staff_repo = StaffMemberRepository::new(self.db);
        let Some(membership) = staff_repo.find_membership(rescue_id, user_id).await? else {
            return Err(AppError::NotFound("staff member".to_string()));
        };

        let updated = staff_repo
            .set_coordinator(membership.id, coordinator)
            .await?
            .ok_or(AppError::NotFound("staff member".to_string()))?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "staff.set_coordinator".to_string(),
                target_kind: "staff_member".to_string(),
                target_id: Some(membership.id),
                detail: Some(coordinator.to_string()),
            })
            .await?;

        Ok(updated)
    }

    /// Removes a staff member from a rescue.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::NotFound)` - User is not staff at this rescue
    pub async fn remove_staff(
        &self,
        actor_id: i32,
        rescue_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        let staff_repo = StaffMemberRepository::new(self.db);
        let Some(membership) = staff_repo.find_membership(rescue_id, user_id).await? else {
            return Err(AppError::NotFound("staff member".to_string()));
        };

        staff_repo.remove(membership.id).await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "staff.remove".to_string(),
                target_kind: "staff_member".to_string(),
                target_id: Some(membership.id),
                detail: None,
            })
            .await?;

        Ok(())
    }
}
