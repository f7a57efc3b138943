//! Pet domain models, enums, and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::pet::{PaginatedPetsDto, PetDto, RatingDto},
    server::error::internal::InternalError,
};

/// Species accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
    Bird,
    Other,
}

impl Species {
    /// The stored/wire string form of the species.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Rabbit => "rabbit",
            Self::Bird => "bird",
            Self::Other => "other",
        }
    }

    /// Parses client-supplied input; `None` for unrecognized values.
    pub fn from_input(value: &str) -> Option<Self> {
        match value {
            "dog" => Some(Self::Dog),
            "cat" => Some(Self::Cat),
            "rabbit" => Some(Self::Rabbit),
            "bird" => Some(Self::Bird),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Parses a stored column value; unknown values indicate corrupted data.
    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::from_input(value).ok_or_else(|| InternalError::UnknownEnumValue {
            column: "pet.species",
            value: value.to_string(),
        })
    }
}

/// Adoption status of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetStatus {
    /// Listed and open for applications.
    Available,
    /// An application was approved; adoption in progress.
    Pending,
    /// Adoption complete.
    Adopted,
}

impl PetStatus {
    /// The stored/wire string form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Adopted => "adopted",
        }
    }

    /// Parses client-supplied input; `None` for unrecognized values.
    pub fn from_input(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "pending" => Some(Self::Pending),
            "adopted" => Some(Self::Adopted),
            _ => None,
        }
    }

    /// Parses a stored column value; unknown values indicate corrupted data.
    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::from_input(value).ok_or_else(|| InternalError::UnknownEnumValue {
            column: "pet.status",
            value: value.to_string(),
        })
    }
}

/// Pet listed by a rescue.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub rescue_id: i32,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub age_months: i32,
    pub status: PetStatus,
    /// Markdown as submitted by staff.
    pub description_source: String,
    /// Sanitized rendering of `description_source`.
    pub description_html: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    /// Converts an entity model to a pet domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Pet)` - The converted pet domain model
    /// - `Err(InternalError::UnknownEnumValue)` - Stored species or status value
    ///   not recognized by this build
    pub fn from_entity(entity: entity::pet::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            rescue_id: entity.rescue_id,
            name: entity.name,
            species: Species::from_stored(&entity.species)?,
            breed: entity.breed,
            age_months: entity.age_months,
            status: PetStatus::from_stored(&entity.status)?,
            description_source: entity.description_source,
            description_html: entity.description_html,
            photo_url: entity.photo_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the pet domain model to a DTO for API responses.
    pub fn into_dto(self) -> PetDto {
        PetDto {
            id: self.id,
            rescue_id: self.rescue_id,
            name: self.name,
            species: self.species.as_str().to_string(),
            breed: self.breed,
            age_months: self.age_months,
            status: self.status.as_str().to_string(),
            description_source: self.description_source,
            description_html: self.description_html,
            photo_url: self.photo_url,
            created_at: self.created_at,
        }
    }
}

/// Parameters for listing pets with optional filters.
#[derive(Debug, Clone)]
pub struct PetFilterParam {
    pub species: Option<Species>,
    pub status: Option<PetStatus>,
    pub rescue_id: Option<i32>,
    pub page: u64,
    pub per_page: u64,
}

/// Parameters for creating a pet.
#[derive(Debug, Clone)]
pub struct CreatePetParam {
    pub rescue_id: i32,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description_source: String,
    pub description_html: String,
    pub photo_url: Option<String>,
}

/// Parameters for updating a pet. All fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdatePetParam {
    pub id: i32,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub age_months: i32,
    pub status: PetStatus,
    pub description_source: String,
    pub description_html: String,
    pub photo_url: Option<String>,
}

/// Paginated collection of pets with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPets {
    pub pets: Vec<Pet>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPets {
    /// Converts the paginated pets domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedPetsDto {
        PaginatedPetsDto {
            pets: self.pets.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// A user's swipe verdict on a pet.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub user_id: i32,
    pub pet_id: i32,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    /// Converts an entity model to a rating domain model.
    pub fn from_entity(entity: entity::rating::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            pet_id: entity.pet_id,
            liked: entity.liked,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the rating domain model to a DTO for API responses.
    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            id: self.id,
            user_id: self.user_id,
            pet_id: self.pet_id,
            liked: self.liked,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for upserting a rating. Re-rating the same pet replaces the verdict.
#[derive(Debug, Clone)]
pub struct RatePetParam {
    pub user_id: i32,
    pub pet_id: i32,
    pub liked: bool,
}
