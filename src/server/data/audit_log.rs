//! Audit log data repository.
//!
//! Audit rows are append-only; there is no update or delete path.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::audit::{AuditLog, RecordAuditParam},
};

/// Repository providing database operations for the audit trail.
pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    /// Creates a new AuditLogRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit entry.
    ///
    /// # Returns
    /// - `Ok(())` - Entry recorded
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn record(&self, param: RecordAuditParam) -> Result<(), AppError> {
        entity::audit_log::ActiveModel {
            actor_id: ActiveValue::Set(param.actor_id),
            action: ActiveValue::Set(param.action),
            target_kind: ActiveValue::Set(param.target_kind),
            target_id: ActiveValue::Set(param.target_id),
            detail: ActiveValue::Set(param.detail),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets audit entries, paginated and newest first, with actor names
    /// attached.
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries for the page and total count
    /// - `Err(AppError)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AuditLog>, u64), AppError> {
        let paginator = entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let actor_ids: Vec<i32> = entities.iter().map(|entity| entity.actor_id).collect();
        let actors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(actor_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut entries = Vec::with_capacity(entities.len());
        for entity in entities {
            let actor = actors
                .get(&entity.actor_id)
                .cloned()
                .ok_or(AppError::NotFound("actor".to_string()))?;
            entries.push(AuditLog::from_entities(entity, actor));
        }

        Ok((entries, total))
    }
}
