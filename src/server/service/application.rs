//! Adoption application lifecycle.
//!
//! Applications move pending -> approved/rejected (staff decision) or
//! pending -> withdrawn (applicant). An approval also marks the pet pending
//! and opens a chat between the applicant and the rescue.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        application::ApplicationRepository, audit_log::AuditLogRepository,
        chat::ChatRepository, chat_participant::ChatParticipantRepository,
        notification::NotificationRepository, pet::PetRepository,
        staff_member::StaffMemberRepository,
    },
    error::AppError,
    model::{
        application::{
            Application, ApplicationStatus, CreateApplicationParam, PaginatedApplications,
        },
        audit::RecordAuditParam,
        chat::OpenChatParam,
        notification::CreateNotificationParam,
        pet::PetStatus,
    },
};

/// Service providing business logic for adoption applications.
pub struct ApplicationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new ApplicationService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application for a pet.
    ///
    /// The pet must exist and still be available, and a user gets one
    /// application per pet. The rescue's staff are notified.
    ///
    /// # Returns
    /// - `Ok(Application)` - The pending application
    /// - `Err(AppError::NotFound)` - No such pet
    /// - `Err(AppError::BadRequest)` - Pet not available or duplicate application
    pub async fn submit(
        &self,
        user_id: i32,
        pet_id: i32,
        message: &str,
    ) -> Result<Application, AppError> {
        let pet = PetRepository::new(self.db)
            .find_by_id(pet_id)
            .await?
            .ok_or(AppError::NotFound("pet".to_string()))?;

        if pet.status != PetStatus::Available {
            return Err(AppError::BadRequest(
                "pet is not available for adoption".to_string(),
            ));
        }

        let application_repo = ApplicationRepository::new(self.db);
        if application_repo.exists_for(pet_id, user_id).await? {
            return Err(AppError::BadRequest(
                "you already applied for this pet".to_string(),
            ));
        }

        let application = application_repo
            .create(CreateApplicationParam {
                pet_id,
                user_id,
                message: message.to_string(),
            })
            .await?;

        let staff_ids = StaffMemberRepository::new(self.db)
            .get_user_ids_by_rescue(pet.rescue_id)
            .await?;
        NotificationRepository::new(self.db)
            .create_for_users(
                &staff_ids,
                "application.submitted",
                &format!("New adoption application for {}", pet.name),
            )
            .await?;

        Ok(application)
    }

    /// Retrieves one application.
    ///
    /// # Returns
    /// - `Ok(Application)` - The application
    /// - `Err(AppError::NotFound)` - No such application
    pub async fn get(&self, id: i32) -> Result<Application, AppError> {
        ApplicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("application".to_string()))
    }

    /// Lists applications for a rescue's pets, optionally filtered by status.
    pub async fn get_for_rescue(
        &self,
        rescue_id: i32,
        status: Option<ApplicationStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedApplications, AppError> {
        let (applications, total) = ApplicationRepository::new(self.db)
            .get_by_rescue_paginated(rescue_id, status, page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedApplications {
            applications,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Lists the calling user's own applications.
    pub async fn get_mine(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedApplications, AppError> {
        let (applications, total) = ApplicationRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedApplications {
            applications,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Decides a pending application.
    ///
    /// Approval marks the pet pending, opens a chat between the applicant and
    /// the rescue about this application, and notifies the applicant.
    /// Rejection only notifies. Either decision lands in the audit trail.
    ///
    /// # Arguments
    /// - `actor_id` - Staff member making the decision
    /// - `id` - Application being decided
    /// - `decision` - `Approved` or `Rejected`
    ///
    /// # Returns
    /// - `Ok(Application)` - The decided application
    /// - `Err(AppError::NotFound)` - No such application
    /// - `Err(AppError::BadRequest)` - Application already decided, or an
    ///   invalid decision status
    pub async fn decide(
        &self,
        actor_id: i32,
        id: i32,
        decision: ApplicationStatus,
    ) -> Result<Application, AppError> {
        if !matches!(
            decision,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        ) {
            return Err(AppError::BadRequest(
                "decision must be approved or rejected".to_string(),
            ));
        }

        let application = self.get(id).await?;
        if application.status != ApplicationStatus::Pending {
            return Err(AppError::BadRequest(
                "application has already been decided".to_string(),
            ));
        }

        let application_repo = ApplicationRepository::new(self.db);
        let application = application_repo
            .set_status(id, decision)
            .await?
            .ok_or(AppError::NotFound("application".to_string()))?;

        let pet = PetRepository::new(self.db)
            .find_by_id(application.pet_id)
            .await?
            .ok_or(AppError::NotFound("pet".to_string()))?;

        let notification_repo = NotificationRepository::new(self.db);
        match decision {
            ApplicationStatus::Approved => {
                PetRepository::new(self.db)
                    .set_status(pet.id, PetStatus::Pending)
                    .await?;

                self.open_decision_chat(&application, pet.rescue_id).await?;

                notification_repo
                    .create(CreateNotificationParam {
                        user_id: application.user_id,
                        kind: "application.approved".to_string(),
                        body: format!(
                            "Your application for {} was approved. The rescue opened a chat with you.",
                            pet.name
                        ),
                    })
                    .await?;
            }
            ApplicationStatus::Rejected => {
                notification_repo
                    .create(CreateNotificationParam {
                        user_id: application.user_id,
                        kind: "application.rejected".to_string(),
                        body: format!("Your application for {} was not accepted", pet.name),
                    })
                    .await?;
            }
            _ => unreachable!(),
        }

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: match decision {
                    ApplicationStatus::Approved => "application.approve".to_string(),
                    _ => "application.reject".to_string(),
                },
                target_kind: "application".to_string(),
                target_id: Some(id),
                detail: Some(pet.name),
            })
            .await?;

        Ok(application)
    }

    /// Withdraws the caller's own pending application.
    ///
    /// # Returns
    /// - `Ok(Application)` - The withdrawn application
    /// - `Err(AppError::NotFound)` - No such application, or not the caller's
    /// - `Err(AppError::BadRequest)` - Application already decided
    pub async fn withdraw(&self, user_id: i32, id: i32) -> Result<Application, AppError> {
        let application = self.get(id).await?;
        if application.user_id != user_id {
            return Err(AppError::NotFound("application".to_string()));
        }
        if application.status != ApplicationStatus::Pending {
            return Err(AppError::BadRequest(
                "only pending applications can be withdrawn".to_string(),
            ));
        }

        ApplicationRepository::new(self.db)
            .set_status(id, ApplicationStatus::Withdrawn)
            .await?
            .ok_or(AppError::NotFound("application".to_string()))
    }

    /// Opens (or reuses) the chat created by an approval, with the applicant
    /// already joined.
    async fn open_decision_chat(
        &self,
        application: &Application,
        rescue_id: i32,
    ) -> Result<(), AppError> {
        let chat_repo = ChatRepository::new(self.db);
        let param = OpenChatParam {
            creator_id: application.user_id,
            rescue_id,
            application_id: Some(application.id),
        };

        let chat = match chat_repo.find_existing(&param).await? {
            Some(chat) => chat,
            None => chat_repo.create(&param).await?,
        };

        ChatParticipantRepository::new(self.db)
            .ensure(chat.id, application.user_id)
            .await?;

        Ok(())
    }
}
