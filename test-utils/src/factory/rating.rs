//! Rating factory for creating test pet rating entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ratings.
pub struct RatingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    pet_id: i32,
    liked: bool,
}

impl<'a> RatingFactory<'a> {
    /// Creates a new RatingFactory with default values.
    ///
    /// Defaults:
    /// - liked: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, pet_id: i32) -> Self {
        Self {
            db,
            user_id,
            pet_id,
            liked: true,
        }
    }

    /// Sets whether the user liked (swiped right on) the pet.
    pub fn liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    /// Builds and inserts the rating entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rating::Model)` - Created rating entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rating::Model, DbErr> {
        let now = Utc::now();
        entity::rating::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            pet_id: ActiveValue::Set(self.pet_id),
            liked: ActiveValue::Set(self.liked),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a liked rating with default values.
///
/// Shorthand for `RatingFactory::new(db, user_id, pet_id).build().await`.
pub async fn create_rating(
    db: &DatabaseConnection,
    user_id: i32,
    pet_id: i32,
) -> Result<entity::rating::Model, DbErr> {
    RatingFactory::new(db, user_id, pet_id).build().await
}
