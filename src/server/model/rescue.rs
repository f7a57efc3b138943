//! Rescue domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::rescue::{PaginatedRescuesDto, RescueDto};

/// Animal-rescue organization account.
#[derive(Debug, Clone, PartialEq)]
pub struct Rescue {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub city: String,
    /// Markdown as submitted by the coordinator.
    pub description_source: String,
    /// Sanitized rendering of `description_source`.
    pub description_html: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rescue {
    /// Converts an entity model to a rescue domain model.
    pub fn from_entity(entity: entity::rescue::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            city: entity.city,
            description_source: entity.description_source,
            description_html: entity.description_html,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the rescue domain model to a DTO for API responses.
    pub fn into_dto(self) -> RescueDto {
        RescueDto {
            id: self.id,
            name: self.name,
            email: self.email,
            city: self.city,
            description_source: self.description_source,
            description_html: self.description_html,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a rescue.
#[derive(Debug, Clone)]
pub struct CreateRescueParam {
    pub name: String,
    pub email: String,
    pub city: String,
    pub description_source: String,
    pub description_html: String,
}

/// Parameters for updating a rescue's profile. All fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdateRescueParam {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub city: String,
    pub description_source: String,
    pub description_html: String,
}

/// Paginated collection of rescues with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRescues {
    pub rescues: Vec<Rescue>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedRescues {
    /// Converts the paginated rescues domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedRescuesDto {
        PaginatedRescuesDto {
            rescues: self.rescues.into_iter().map(|r| r.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
