//! Audit log domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::admin::{AuditLogDto, PaginatedAuditLogsDto};

/// One recorded staff- or admin-initiated mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i32,
    pub actor_id: i32,
    pub actor_name: String,
    /// Dotted action name, e.g. `pet.delete` or `application.approve`.
    pub action: String,
    pub target_kind: String,
    pub target_id: Option<i32>,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Builds the domain model from an audit row and its joined actor row.
    pub fn from_entities(entity: entity::audit_log::Model, actor: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            actor_id: entity.actor_id,
            actor_name: format!("{} {}", actor.first_name, actor.last_name),
            action: entity.action,
            target_kind: entity.target_kind,
            target_id: entity.target_id,
            detail: entity.detail,
            created_at: entity.created_at,
        }
    }

    /// Converts the audit log domain model to a DTO for API responses.
    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            actor_id: self.actor_id,
            actor_name: self.actor_name,
            action: self.action,
            target_kind: self.target_kind,
            target_id: self.target_id,
            detail: self.detail,
            created_at: self.created_at,
        }
    }
}

/// Parameters for appending an audit row.
#[derive(Debug, Clone)]
pub struct RecordAuditParam {
    pub actor_id: i32,
    pub action: String,
    pub target_kind: String,
    pub target_id: Option<i32>,
    pub detail: Option<String>,
}

/// Paginated collection of audit logs with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAuditLogs {
    pub audit_logs: Vec<AuditLog>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAuditLogs {
    /// Converts the paginated audit logs domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedAuditLogsDto {
        PaginatedAuditLogsDto {
            audit_logs: self.audit_logs.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
