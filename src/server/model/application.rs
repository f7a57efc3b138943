//! Adoption application domain models, status enum, and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::application::{ApplicationDto, PaginatedApplicationsDto},
    server::error::internal::InternalError,
};

/// Lifecycle state of an adoption application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    /// Submitted, awaiting a staff decision.
    Pending,
    /// Approved by rescue staff.
    Approved,
    /// Rejected by rescue staff.
    Rejected,
    /// Withdrawn by the applicant.
    Withdrawn,
}

impl ApplicationStatus {
    /// The stored/wire string form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Parses client-supplied input; `None` for unrecognized values.
    pub fn from_input(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// Parses a stored column value; unknown values indicate corrupted data.
    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::from_input(value).ok_or_else(|| InternalError::UnknownEnumValue {
            column: "application.status",
            value: value.to_string(),
        })
    }
}

/// Adoption application, enriched with pet and applicant names for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub pet_id: i32,
    pub pet_name: String,
    pub user_id: i32,
    pub applicant_name: String,
    pub status: ApplicationStatus,
    /// The applicant's note to the rescue.
    pub message: String,
    /// Set by the reminder job once staff have been nudged.
    pub reminded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Builds the domain model from an application row and its joined pet and
    /// applicant rows.
    ///
    /// # Returns
    /// - `Ok(Application)` - The converted domain model
    /// - `Err(InternalError::UnknownEnumValue)` - Stored status not recognized
    pub fn from_entities(
        entity: entity::application::Model,
        pet: entity::pet::Model,
        user: entity::user::Model,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            pet_id: entity.pet_id,
            pet_name: pet.name,
            user_id: entity.user_id,
            applicant_name: format!("{} {}", user.first_name, user.last_name),
            status: ApplicationStatus::from_stored(&entity.status)?,
            message: entity.message,
            reminded_at: entity.reminded_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the application domain model to a DTO for API responses.
    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            pet_id: self.pet_id,
            pet_name: self.pet_name,
            user_id: self.user_id,
            applicant_name: self.applicant_name,
            status: self.status.as_str().to_string(),
            message: self.message,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for submitting an application.
#[derive(Debug, Clone)]
pub struct CreateApplicationParam {
    pub pet_id: i32,
    pub user_id: i32,
    pub message: String,
}

/// Paginated collection of applications with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedApplications {
    pub applications: Vec<Application>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedApplications {
    /// Converts the paginated applications domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedApplicationsDto {
        PaginatedApplicationsDto {
            applications: self
                .applications
                .into_iter()
                .map(|a| a.into_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
