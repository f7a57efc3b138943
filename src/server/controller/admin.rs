use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{PaginatedAuditLogsDto, SetupDto},
        api::ErrorDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Claim the one-time admin setup code.
///
/// When the server starts with no admin account, it logs a setup code. Any
/// authenticated user who submits the code within its lifetime becomes the
/// first admin; the code is consumed on success.
///
/// # Access Control
/// - Any authenticated user holding the setup code
///
/// # Returns
/// - `204 No Content` - Caller is now an admin
/// - `400 Bad Request` - Wrong, expired, or already-used code
#[utoipa::path(
    post,
    path = "/api/v1/admin/setup",
    tag = ADMIN_TAG,
    request_body = SetupDto,
    responses(
        (status = 204, description = "Caller promoted to admin"),
        (status = 400, description = "Invalid or expired setup code", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    AdminService::new(&state.db, &state.setup_codes)
        .claim_setup_code(caller.id, &payload.code)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the audit trail.
///
/// Returns staff- and admin-initiated mutations, newest first.
///
/// # Access Control
/// - `ViewAuditLogs` - Admins only
#[utoipa::path(
    get,
    path = "/api/v1/admin/audit-logs",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated audit logs", body = PaginatedAuditLogsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_audit_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ViewAuditLogs])
        .await?;

    let audit_logs = AdminService::new(&state.db, &state.setup_codes)
        .get_audit_logs(params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(audit_logs.into_dto())))
}
