//! Swipe rating data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::pet::{RatePetParam, Rating},
};

/// Repository providing database operations for pet ratings.
pub struct RatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingRepository<'a> {
    /// Creates a new RatingRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a rating, replacing any earlier rating by the same user for the
    /// same pet.
    ///
    /// Re-rating updates the existing row in place rather than inserting a
    /// duplicate, so the (user, pet) pair stays unique.
    ///
    /// # Arguments
    /// - `param` - User, pet, and liked verdict
    ///
    /// # Returns
    /// - `Ok(Rating)` - The stored rating
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: RatePetParam) -> Result<Rating, AppError> {
        let now = Utc::now();
        let existing = entity::prelude::Rating::find()
            .filter(entity::rating::Column::UserId.eq(param.user_id))
            .filter(entity::rating::Column::PetId.eq(param.pet_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(rating) => {
                let mut active_model: entity::rating::ActiveModel = rating.into();
                active_model.liked = ActiveValue::Set(param.liked);
                active_model.updated_at = ActiveValue::Set(now);
                active_model.update(self.db).await?
            }
            None => {
                entity::rating::ActiveModel {
                    user_id: ActiveValue::Set(param.user_id),
                    pet_id: ActiveValue::Set(param.pet_id),
                    liked: ActiveValue::Set(param.liked),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Rating::from_entity(entity))
    }

    /// Gets all liked ratings by a user, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Rating>)` - The user's likes
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_likes_by_user(&self, user_id: i32) -> Result<Vec<Rating>, AppError> {
        let entities = entity::prelude::Rating::find()
            .filter(entity::rating::Column::UserId.eq(user_id))
            .filter(entity::rating::Column::Liked.eq(true))
            .order_by_desc(entity::rating::Column::UpdatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rating::from_entity).collect())
    }
}
