//! Pet data repository for listings, filtering, and the discovery feed.

use chrono::Utc;
use sea_orm::{
    sea_query::{self, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::pet::{CreatePetParam, Pet, PetFilterParam, PetStatus, UpdatePetParam},
};

/// Repository providing database operations for pet listings.
pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    /// Creates a new PetRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new pet listing.
    ///
    /// New pets always start in the available status.
    ///
    /// # Arguments
    /// - `param` - Pet creation parameters with pre-rendered description
    ///
    /// # Returns
    /// - `Ok(Pet)` - The created pet
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreatePetParam) -> Result<Pet, AppError> {
        let now = Utc::now();
        let entity = entity::pet::ActiveModel {
            rescue_id: ActiveValue::Set(param.rescue_id),
            name: ActiveValue::Set(param.name),
            species: ActiveValue::Set(param.species.as_str().to_string()),
            breed: ActiveValue::Set(param.breed),
            age_months: ActiveValue::Set(param.age_months),
            status: ActiveValue::Set(PetStatus::Available.as_str().to_string()),
            description_source: ActiveValue::Set(param.description_source),
            description_html: ActiveValue::Set(param.description_html),
            photo_url: ActiveValue::Set(param.photo_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pet::from_entity(entity)?)
    }

    /// Finds a pet by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - Pet found
    /// - `Ok(None)` - No pet with that ID
    /// - `Err(AppError)` - Database error or a stored value outside the known
    ///   species/status sets
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        let entity = entity::prelude::Pet::find_by_id(id).one(self.db).await?;

        entity.map(Pet::from_entity).transpose().map_err(Into::into)
    }

    /// Gets pets matching the given filters, paginated and ordered newest first.
    ///
    /// All filters are optional and combine with AND semantics.
    ///
    /// # Arguments
    /// - `param` - Optional species, status, and rescue filters plus pagination
    ///
    /// # Returns
    /// - `Ok((pets, total))` - Matching pets for the page and total match count
    /// - `Err(AppError)` - Database error during query
    pub async fn get_filtered_paginated(
        &self,
        param: PetFilterParam,
    ) -> Result<(Vec<Pet>, u64), AppError> {
        let mut query = entity::prelude::Pet::find();

        if let Some(species) = param.species {
            query = query.filter(entity::pet::Column::Species.eq(species.as_str()));
        }
        if let Some(status) = param.status {
            query = query.filter(entity::pet::Column::Status.eq(status.as_str()));
        }
        if let Some(rescue_id) = param.rescue_id {
            query = query.filter(entity::pet::Column::RescueId.eq(rescue_id));
        }

        let paginator = query
            .order_by_desc(entity::pet::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;

        let mut pets = Vec::with_capacity(entities.len());
        for entity in entities {
            pets.push(Pet::from_entity(entity)?);
        }

        Ok((pets, total))
    }

    /// Gets available pets the user has not yet rated, for the swipe feed.
    ///
    /// Excludes pets with any rating by the user, liked or not, so a pet is
    /// only ever presented once. Oldest listings come first so long-waiting
    /// pets get seen.
    ///
    /// # Arguments
    /// - `user_id` - The browsing user
    /// - `limit` - Maximum number of pets to return
    ///
    /// # Returns
    /// - `Ok(Vec<Pet>)` - Unrated available pets, up to the limit
    /// - `Err(AppError)` - Database error during query
    pub async fn get_unrated_available(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<Pet>, AppError> {
        let rated_pet_ids = sea_query::Query::select()
            .column(entity::rating::Column::PetId)
            .from(entity::prelude::Rating)
            .and_where(sea_query::Expr::col(entity::rating::Column::UserId).eq(user_id))
            .to_owned();

        let entities = entity::prelude::Pet::find()
            .filter(entity::pet::Column::Status.eq(PetStatus::Available.as_str()))
            .filter(entity::pet::Column::Id.not_in_subquery(rated_pet_ids))
            .order_by_asc(entity::pet::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        let mut pets = Vec::with_capacity(entities.len());
        for entity in entities {
            pets.push(Pet::from_entity(entity)?);
        }

        Ok(pets)
    }

    /// Updates a pet listing.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The updated pet
    /// - `Ok(None)` - No pet with that ID
    /// - `Err(AppError)` - Database error during query or update
    pub async fn update(&self, param: UpdatePetParam) -> Result<Option<Pet>, AppError> {
        let Some(pet) = entity::prelude::Pet::find_by_id(param.id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::pet::ActiveModel = pet.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.species = ActiveValue::Set(param.species.as_str().to_string());
        active_model.breed = ActiveValue::Set(param.breed);
        active_model.age_months = ActiveValue::Set(param.age_months);
        active_model.status = ActiveValue::Set(param.status.as_str().to_string());
        active_model.description_source = ActiveValue::Set(param.description_source);
        active_model.description_html = ActiveValue::Set(param.description_html);
        active_model.photo_url = ActiveValue::Set(param.photo_url);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Pet::from_entity(entity)?))
    }

    /// Sets the adoption status of a pet.
    ///
    /// # Returns
    /// - `Ok(())` - Status updated (or no matching pet found)
    /// - `Err(AppError)` - Database error during update
    pub async fn set_status(&self, id: i32, status: PetStatus) -> Result<(), AppError> {
        entity::prelude::Pet::update_many()
            .filter(entity::pet::Column::Id.eq(id))
            .col_expr(
                entity::pet::Column::Status,
                sea_query::Expr::value(status.as_str()),
            )
            .col_expr(
                entity::pet::Column::UpdatedAt,
                sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a pet listing and, via cascading foreign keys, its applications
    /// and ratings.
    ///
    /// # Returns
    /// - `Ok(())` - Pet deleted (or no matching pet found)
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Pet::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
