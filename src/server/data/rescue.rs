//! Rescue organization data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::rescue::{CreateRescueParam, Rescue, UpdateRescueParam},
};

/// Repository providing database operations for rescue organizations.
pub struct RescueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RescueRepository<'a> {
    /// Creates a new RescueRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new rescue organization.
    ///
    /// # Arguments
    /// - `param` - Rescue creation parameters with pre-rendered description
    ///
    /// # Returns
    /// - `Ok(Rescue)` - The created rescue
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRescueParam) -> Result<Rescue, AppError> {
        let now = Utc::now();
        let entity = entity::rescue::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            city: ActiveValue::Set(param.city),
            description_source: ActiveValue::Set(param.description_source),
            description_html: ActiveValue::Set(param.description_html),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rescue::from_entity(entity))
    }

    /// Finds a rescue by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Rescue))` - Rescue found
    /// - `Ok(None)` - No rescue with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rescue>, AppError> {
        let entity = entity::prelude::Rescue::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rescue::from_entity))
    }

    /// Gets all rescues with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of rescues per page
    ///
    /// # Returns
    /// - `Ok((rescues, total))` - Rescues for the page and total count
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Rescue>, u64), AppError> {
        let paginator = entity::prelude::Rescue::find()
            .order_by_asc(entity::rescue::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let rescues = entities.into_iter().map(Rescue::from_entity).collect();

        Ok((rescues, total))
    }

    /// Updates a rescue's profile fields.
    ///
    /// # Returns
    /// - `Ok(Some(Rescue))` - The updated rescue
    /// - `Ok(None)` - No rescue with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(&self, param: UpdateRescueParam) -> Result<Option<Rescue>, AppError> {
        let Some(rescue) = entity::prelude::Rescue::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::rescue::ActiveModel = rescue.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.email = ActiveValue::Set(param.email);
        active_model.city = ActiveValue::Set(param.city);
        active_model.description_source = ActiveValue::Set(param.description_source);
        active_model.description_html = ActiveValue::Set(param.description_html);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Rescue::from_entity(entity)))
    }

    /// Deletes a rescue and, via cascading foreign keys, its pets, staff rows,
    /// and chats.
    ///
    /// # Returns
    /// - `Ok(())` - Rescue deleted (or no matching rescue found)
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Rescue::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
