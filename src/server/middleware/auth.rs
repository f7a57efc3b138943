//! Bearer-token authentication and permission checks.
//!
//! Every protected endpoint builds an `AuthGuard` from the request headers
//! and requires the permissions it needs. The guard verifies the JWT, loads
//! the account, resolves the caller's role for each permission's scope, and
//! consults the static permission table.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{staff_member::StaffMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{
        auth::token,
        permission::{allows, Action, Role},
    },
};

/// Permission required by an endpoint.
///
/// Rescue-scoped variants carry the rescue the action targets; the caller's
/// role is resolved against that rescue.
pub enum Permission {
    /// Platform administrator.
    Admin,
    /// Manage user accounts (admin only).
    ManageUsers,
    /// Read the audit trail (admin only).
    ViewAuditLogs,
    /// See the staff roster of a rescue.
    ViewStaff(i32),
    /// Create, edit, and remove a rescue's pets.
    ManagePets(i32),
    /// Decide applications for a rescue's pets.
    ReviewApplications(i32),
    /// Manage a rescue's staff roster.
    ManageStaff(i32),
    /// Edit or delete the rescue itself.
    ManageRescue(i32),
}

impl Permission {
    /// The table action this permission checks, and its rescue scope if any.
    fn action_and_scope(&self) -> (Action, Option<i32>) {
        match self {
            Permission::Admin => (Action::ManageUsers, None),
            Permission::ManageUsers => (Action::ManageUsers, None),
            Permission::ViewAuditLogs => (Action::ViewAuditLogs, None),
            Permission::ViewStaff(rescue_id) => (Action::ViewStaff, Some(*rescue_id)),
            Permission::ManagePets(rescue_id) => (Action::ManagePets, Some(*rescue_id)),
            Permission::ReviewApplications(rescue_id) => {
                (Action::ReviewApplications, Some(*rescue_id))
            }
            Permission::ManageStaff(rescue_id) => (Action::ManageStaff, Some(*rescue_id)),
            Permission::ManageRescue(rescue_id) => (Action::ManageRescue, Some(*rescue_id)),
        }
    }
}

/// Guard verifying the caller's identity and permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            jwt_secret,
            headers,
        }
    }

    /// Authenticates the caller and checks every listed permission.
    ///
    /// An empty permission list means any authenticated user passes.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated account
    /// - `Err(AppError::AuthErr)` - Missing/invalid token or denied permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token()?;
        let claims = token::verify_token(self.jwt_secret, token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.id).into());
        };

        for permission in permissions {
            let (action, scope) = permission.action_and_scope();
            let role = self.resolve_role(&user, scope).await?;

            if !allows(role, action) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("missing permission for {:?}", action),
                )
                .into());
            }
        }

        Ok(user)
    }

    /// Resolves the caller's role for a rescue scope.
    async fn resolve_role(&self, user: &User, scope: Option<i32>) -> Result<Role, AppError> {
        if user.admin {
            return Ok(Role::Admin);
        }

        let Some(rescue_id) = scope else {
            return Ok(Role::Adopter);
        };

        let membership = StaffMemberRepository::new(self.db)
            .find_membership(rescue_id, user.id)
            .await?;

        Ok(match membership {
            Some(membership) if membership.coordinator => Role::Coordinator,
            Some(_) => Role::Staff,
            None => Role::Adopter,
        })
    }

    /// Extracts the bearer token from the Authorization header.
    fn bearer_token(&self) -> Result<&str, AuthError> {
        let value = self
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;
        let value = value.to_str().map_err(|_| AuthError::InvalidToken)?;

        value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidToken)
    }
}
