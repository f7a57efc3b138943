//! Rescue factory for creating test rescue organization entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rescues with customizable fields.
///
/// Defaults give each rescue a unique name and email so uniqueness constraints
/// never collide between factory calls.
pub struct RescueFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    city: String,
    description_source: String,
    description_html: String,
}

impl<'a> RescueFactory<'a> {
    /// Creates a new RescueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Rescue {id}"` where id is auto-incremented
    /// - email: `"rescue{id}@example.com"`
    /// - city: `"Springfield"`
    /// - description_source / description_html: empty strings
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Rescue {}", id),
            email: format!("rescue{}@example.com", id),
            city: "Springfield".to_string(),
            description_source: String::new(),
            description_html: String::new(),
        }
    }

    /// Sets the name for the rescue.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email for the rescue.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the city for the rescue.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets both the markdown source and rendered HTML description.
    pub fn description(mut self, source: impl Into<String>, html: impl Into<String>) -> Self {
        self.description_source = source.into();
        self.description_html = html.into();
        self
    }

    /// Builds and inserts the rescue entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rescue::Model)` - Created rescue entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rescue::Model, DbErr> {
        let now = Utc::now();
        entity::rescue::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            city: ActiveValue::Set(self.city),
            description_source: ActiveValue::Set(self.description_source),
            description_html: ActiveValue::Set(self.description_html),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rescue with default values.
///
/// Shorthand for `RescueFactory::new(db).build().await`.
pub async fn create_rescue(db: &DatabaseConnection) -> Result<entity::rescue::Model, DbErr> {
    RescueFactory::new(db).build().await
}
