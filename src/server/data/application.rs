//! Adoption application data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{self, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::application::{Application, ApplicationStatus, CreateApplicationParam},
};

/// Repository providing database operations for adoption applications.
pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    /// Creates a new ApplicationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new pending application.
    ///
    /// # Arguments
    /// - `param` - Pet, applicant, and application message
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application with pet and applicant data
    /// - `Err(AppError)` - Database error, including the unique violation when
    ///   the user already applied for that pet
    pub async fn create(&self, param: CreateApplicationParam) -> Result<Application, AppError> {
        let now = Utc::now();
        let entity = entity::application::ActiveModel {
            pet_id: ActiveValue::Set(param.pet_id),
            user_id: ActiveValue::Set(param.user_id),
            status: ActiveValue::Set(ApplicationStatus::Pending.as_str().to_string()),
            message: ActiveValue::Set(param.message),
            reminded_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.attach_related(entity).await
    }

    /// Finds an application by its primary key, with pet and applicant data.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - Application found
    /// - `Ok(None)` - No application with that ID
    /// - `Err(AppError)` - Database error or a stored status outside the known set
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Application>, AppError> {
        let Some(entity) = entity::prelude::Application::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        Ok(Some(self.attach_related(entity).await?))
    }

    /// Checks whether a user already has an application for a pet.
    ///
    /// # Returns
    /// - `Ok(bool)` - True if an application exists, regardless of status
    /// - `Err(AppError::DbErr)` - Database error during count query
    pub async fn exists_for(&self, pet_id: i32, user_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Application::find()
            .filter(entity::application::Column::PetId.eq(pet_id))
            .filter(entity::application::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets applications for all pets of a rescue, paginated and newest first.
    ///
    /// # Arguments
    /// - `rescue_id` - Rescue whose inbox is being read
    /// - `status` - Optional status filter
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Applications per page
    ///
    /// # Returns
    /// - `Ok((applications, total))` - Applications for the page and total count
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_rescue_paginated(
        &self,
        rescue_id: i32,
        status: Option<ApplicationStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Application>, u64), AppError> {
        let pet_ids = sea_query::Query::select()
            .column(entity::pet::Column::Id)
            .from(entity::prelude::Pet)
            .and_where(sea_query::Expr::col(entity::pet::Column::RescueId).eq(rescue_id))
            .to_owned();

        let mut query = entity::prelude::Application::find()
            .filter(entity::application::Column::PetId.in_subquery(pet_ids));

        if let Some(status) = status {
            query = query.filter(entity::application::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::application::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let applications = self.attach_related_batch(entities).await?;

        Ok((applications, total))
    }

    /// Gets a user's own applications, paginated and newest first.
    ///
    /// # Returns
    /// - `Ok((applications, total))` - Applications for the page and total count
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Application>, u64), AppError> {
        let paginator = entity::prelude::Application::find()
            .filter(entity::application::Column::UserId.eq(user_id))
            .order_by_desc(entity::application::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let applications = self.attach_related_batch(entities).await?;

        Ok((applications, total))
    }

    /// Sets the status of an application.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - The updated application
    /// - `Ok(None)` - No application with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn set_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, AppError> {
        let Some(application) = entity::prelude::Application::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::application::ActiveModel = application.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        Ok(Some(self.attach_related(entity).await?))
    }

    /// Gets pending applications created before the cutoff that have not yet
    /// triggered a reminder.
    ///
    /// Used by the hourly reminder job.
    ///
    /// # Returns
    /// - `Ok(Vec<model>)` - Raw application rows awaiting a reminder
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_pending_unreminded_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<entity::application::Model>, AppError> {
        let entities = entity::prelude::Application::find()
            .filter(entity::application::Column::Status.eq(ApplicationStatus::Pending.as_str()))
            .filter(entity::application::Column::RemindedAt.is_null())
            .filter(entity::application::Column::CreatedAt.lt(cutoff))
            .all(self.db)
            .await?;

        Ok(entities)
    }

    /// Marks an application as reminded so the job does not notify twice.
    ///
    /// # Returns
    /// - `Ok(())` - Reminder timestamp recorded
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_reminded(&self, id: i32, at: DateTime<Utc>) -> Result<(), AppError> {
        entity::prelude::Application::update_many()
            .filter(entity::application::Column::Id.eq(id))
            .col_expr(
                entity::application::Column::RemindedAt,
                sea_query::Expr::value(Some(at)),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Loads the pet and applicant for a single application row.
    async fn attach_related(
        &self,
        entity: entity::application::Model,
    ) -> Result<Application, AppError> {
        let pet = entity::prelude::Pet::find_by_id(entity.pet_id)
            .one(self.db)
            .await?
            .ok_or(AppError::NotFound("pet".to_string()))?;
        let user = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?
            .ok_or(AppError::NotFound("applicant".to_string()))?;

        Ok(Application::from_entities(entity, pet, user)?)
    }

    /// Loads pets and applicants for a page of application rows in two batch
    /// queries instead of one pair per row.
    async fn attach_related_batch(
        &self,
        entities: Vec<entity::application::Model>,
    ) -> Result<Vec<Application>, AppError> {
        let pet_ids: Vec<i32> = entities.iter().map(|entity| entity.pet_id).collect();
        let user_ids: Vec<i32> = entities.iter().map(|entity| entity.user_id).collect();

        let pets: HashMap<i32, entity::pet::Model> = entity::prelude::Pet::find()
            .filter(entity::pet::Column::Id.is_in(pet_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|pet| (pet.id, pet))
            .collect();
        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut applications = Vec::with_capacity(entities.len());
        for entity in entities {
            let pet = pets
                .get(&entity.pet_id)
                .cloned()
                .ok_or(AppError::NotFound("pet".to_string()))?;
            let user = users
                .get(&entity.user_id)
                .cloned()
                .ok_or(AppError::NotFound("applicant".to_string()))?;
            applications.push(Application::from_entities(entity, pet, user)?);
        }

        Ok(applications)
    }
}
