//! Pet factory for creating test pet entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets with customizable fields.
///
/// Pets belong to a rescue, so the rescue ID is required at construction.
///
/// # Example
///
/// ```rust,ignore
/// let pet = PetFactory::new(&db, rescue.id)
///     .species("cat")
///     .status("pending")
///     .age_months(6)
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    rescue_id: i32,
    name: String,
    species: String,
    breed: Option<String>,
    age_months: i32,
    status: String,
    description_source: String,
    description_html: String,
    photo_url: Option<String>,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"` where id is auto-incremented
    /// - species: `"dog"`
    /// - breed: `None`
    /// - age_months: `24`
    /// - status: `"available"`
    /// - description_source / description_html: empty strings
    /// - photo_url: `None`
    pub fn new(db: &'a DatabaseConnection, rescue_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            rescue_id,
            name: format!("Pet {}", id),
            species: "dog".to_string(),
            breed: None,
            age_months: 24,
            status: "available".to_string(),
            description_source: String::new(),
            description_html: String::new(),
            photo_url: None,
        }
    }

    /// Sets the name for the pet.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the species for the pet (stored string form, e.g. `"cat"`).
    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    /// Sets the breed for the pet.
    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    /// Sets the age in months for the pet.
    pub fn age_months(mut self, age_months: i32) -> Self {
        self.age_months = age_months;
        self
    }

    /// Sets the adoption status (stored string form, e.g. `"pending"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets both the markdown source and rendered HTML description.
    pub fn description(mut self, source: impl Into<String>, html: impl Into<String>) -> Self {
        self.description_source = source.into();
        self.description_html = html.into();
        self
    }

    /// Builds and inserts the pet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pet::Model)` - Created pet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        let now = Utc::now();
        entity::pet::ActiveModel {
            rescue_id: ActiveValue::Set(self.rescue_id),
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            breed: ActiveValue::Set(self.breed),
            age_months: ActiveValue::Set(self.age_months),
            status: ActiveValue::Set(self.status),
            description_source: ActiveValue::Set(self.description_source),
            description_html: ActiveValue::Set(self.description_html),
            photo_url: ActiveValue::Set(self.photo_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available pet with default values.
///
/// Shorthand for `PetFactory::new(db, rescue_id).build().await`.
pub async fn create_pet(
    db: &DatabaseConnection,
    rescue_id: i32,
) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db, rescue_id).build().await
}
