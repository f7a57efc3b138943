//! Admin bootstrap and audit trail access.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{audit_log::AuditLogRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::audit::{PaginatedAuditLogs, RecordAuditParam},
    service::admin::code::SetupCodeService,
};

pub mod code;

/// Service providing admin bootstrap and audit queries.
pub struct AdminService<'a> {
    pub db: &'a DatabaseConnection,
    setup_codes: &'a SetupCodeService,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    pub fn new(db: &'a DatabaseConnection, setup_codes: &'a SetupCodeService) -> Self {
        Self { db, setup_codes }
    }

    /// Promotes the calling user to admin in exchange for a valid setup code.
    ///
    /// The code was generated at startup when no admin existed; it is
    /// consumed on success. The promotion is recorded in the audit trail.
    ///
    /// # Returns
    /// - `Ok(())` - User promoted
    /// - `Err(AppError::AuthErr)` - Code invalid, expired, or already used
    pub async fn claim_setup_code(&self, user_id: i32, input_code: &str) -> Result<(), AppError> {
        if !self.setup_codes.validate_and_consume(input_code).await {
            return Err(AuthError::InvalidSetupCode.into());
        }

        UserRepository::new(self.db).set_admin(user_id, true).await?;

        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                actor_id: user_id,
                action: "admin.setup".to_string(),
                target_kind: "user".to_string(),
                target_id: Some(user_id),
                detail: None,
            })
            .await?;

        Ok(())
    }

    /// Retrieves the audit trail, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedAuditLogs)` - Entries for the requested page
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_audit_logs(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAuditLogs, AppError> {
        let (audit_logs, total) = AuditLogRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedAuditLogs {
            audit_logs,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn valid_code_promotes_user_and_audits() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::AuditLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let setup_codes = SetupCodeService::new();
        let code = setup_codes.generate().await;

        let service = AdminService::new(db, &setup_codes);
        service.claim_setup_code(user.id, &code).await?;

        let promoted = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
        assert!(promoted.admin);

        let logs = service.get_audit_logs(0, 10).await?;
        assert_eq!(logs.total, 1);
        assert_eq!(logs.audit_logs[0].action, "admin.setup");
        assert_eq!(logs.audit_logs[0].actor_id, user.id);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_code_is_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::AuditLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let setup_codes = SetupCodeService::new();
        setup_codes.generate().await;

        let service = AdminService::new(db, &setup_codes);
        let result = service.claim_setup_code(user.id, "not-the-code").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidSetupCode))
        ));

        let unchanged = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
        assert!(!unchanged.admin);

        Ok(())
    }

    #[tokio::test]
    async fn code_cannot_be_reused() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::AuditLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = factory::create_user(db).await?;
        let second = factory::create_user(db).await?;
        let setup_codes = SetupCodeService::new();
        let code = setup_codes.generate().await;

        let service = AdminService::new(db, &setup_codes);
        service.claim_setup_code(first.id, &code).await?;
        let result = service.claim_setup_code(second.id, &code).await;

        assert!(result.is_err());

        Ok(())
    }
}
