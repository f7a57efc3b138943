//! Pet listings, discovery feed, and swipe ratings.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{audit_log::AuditLogRepository, pet::PetRepository, rating::RatingRepository},
    error::AppError,
    model::{
        audit::RecordAuditParam,
        pet::{
            CreatePetParam, PaginatedPets, Pet, PetFilterParam, PetStatus, RatePetParam, Rating,
            Species,
        },
    },
    service::sanitizer,
};

/// Number of pets served per discovery request.
const DISCOVERY_FEED_SIZE: u64 = 20;

/// Service providing business logic for pet listings and ratings.
pub struct PetService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    /// Creates a new PetService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new pet for a rescue.
    ///
    /// # Returns
    /// - `Ok(Pet)` - The created pet, available for adoption
    /// - `Err(AppError::BadRequest)` - Empty name or negative age
    pub async fn create_pet(&self, actor_id: i32, param: CreatePetRequest) -> Result<Pet, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("pet name must not be empty".to_string()));
        }
        if param.age_months < 0 {
            return Err(AppError::BadRequest("age must not be negative".to_string()));
        }

        let pet = PetRepository::new(self.db)
            .create(CreatePetParam {
                rescue_id: param.rescue_id,
                name: param.name.trim().to_string(),
                species: param.species,
                breed: param.breed,
                age_months: param.age_months,
                description_source: param.description.clone(),
                description_html: sanitizer::render_markdown(&param.description),
                photo_url: param.photo_url,
            })
            .await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "pet.create".to_string(),
                target_kind: "pet".to_string(),
                target_id: Some(pet.id),
                detail: Some(pet.name.clone()),
            })
            .await?;

        Ok(pet)
    }

    /// Retrieves a pet by ID.
    ///
    /// # Returns
    /// - `Ok(Pet)` - The pet
    /// - `Err(AppError::NotFound)` - No such pet
    pub async fn get_pet(&self, id: i32) -> Result<Pet, AppError> {
        PetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("pet".to_string()))
    }

    /// Lists pets matching the given filters.
    pub async fn get_pets(&self, param: PetFilterParam) -> Result<PaginatedPets, AppError> {
        let page = param.page;
        let per_page = param.per_page;
        let (pets, total) = PetRepository::new(self.db)
            .get_filtered_paginated(param)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedPets {
            pets,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Serves the swipe feed: available pets the user has not rated yet.
    ///
    /// The requested size is capped at [`DISCOVERY_FEED_SIZE`].
    pub async fn discover(&self, user_id: i32, limit: Option<u64>) -> Result<Vec<Pet>, AppError> {
        let limit = limit
            .unwrap_or(DISCOVERY_FEED_SIZE)
            .min(DISCOVERY_FEED_SIZE);

        PetRepository::new(self.db)
            .get_unrated_available(user_id, limit)
            .await
    }

    /// Records a user's verdict on a pet, replacing any earlier one.
    ///
    /// Ratings stay valid whatever the pet's current status; a pet that went
    /// pending after the user saw it can still be rated.
    ///
    /// # Returns
    /// - `Ok(Rating)` - The stored rating
    /// - `Err(AppError::NotFound)` - No such pet
    pub async fn rate_pet(&self, user_id: i32, pet_id: i32, liked: bool) -> Result<Rating, AppError> {
        self.get_pet(pet_id).await?;

        RatingRepository::new(self.db)
            .upsert(RatePetParam {
                user_id,
                pet_id,
                liked,
            })
            .await
    }

    /// Lists the pets a user has liked, newest like first.
    pub async fn get_liked_pets(&self, user_id: i32) -> Result<Vec<Pet>, AppError> {
        let likes = RatingRepository::new(self.db)
            .get_likes_by_user(user_id)
            .await?;

        let pet_repo = PetRepository::new(self.db);
        let mut pets = Vec::with_capacity(likes.len());
        for like in likes {
            // A liked pet may have been deleted since; skip the gap.
            if let Some(pet) = pet_repo.find_by_id(like.pet_id).await? {
                pets.push(pet);
            }
        }

        Ok(pets)
    }

    /// Updates a pet listing, re-rendering its description.
    ///
    /// # Returns
    /// - `Ok(Pet)` - The updated pet
    /// - `Err(AppError::NotFound)` - No such pet
    pub async fn update_pet(&self, actor_id: i32, param: UpdatePetRequest) -> Result<Pet, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("pet name must not be empty".to_string()));
        }
        if param.age_months < 0 {
            return Err(AppError::BadRequest("age must not be negative".to_string()));
        }

        let pet = PetRepository::new(self.db)
            .update(crate::server::model::pet::UpdatePetParam {
                id: param.id,
                name: param.name.trim().to_string(),
                species: param.species,
                breed: param.breed,
                age_months: param.age_months,
                status: param.status,
                description_source: param.description.clone(),
                description_html: sanitizer::render_markdown(&param.description),
                photo_url: param.photo_url,
            })
            .await?
            .ok_or(AppError::NotFound("pet".to_string()))?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "pet.update".to_string(),
                target_kind: "pet".to_string(),
                target_id: Some(pet.id),
                detail: None,
            })
            .await?;

        Ok(pet)
    }

    /// Removes a pet listing.
    ///
    /// # Returns
    /// - `Ok(())` - Pet deleted
    /// - `Err(AppError::NotFound)` - No such pet
    pub async fn delete_pet(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        let pet = self.get_pet(id).await?;

        PetRepository::new(self.db).delete(id).await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id,
                action: "pet.delete".to_string(),
                target_kind: "pet".to_string(),
                target_id: Some(id),
                detail: Some(pet.name),
            })
            .await?;

        Ok(())
    }
}

/// Raw fields for listing a pet, before sanitization.
pub struct CreatePetRequest {
    pub rescue_id: i32,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: String,
    pub photo_url: Option<String>,
}

/// Raw fields for updating a pet, before sanitization.
pub struct UpdatePetRequest {
    pub id: i32,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub age_months: i32,
    pub status: PetStatus,
    pub description: String,
    pub photo_url: Option<String>,
}
