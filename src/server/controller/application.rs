use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        application::{
            ApplicationDto, CreateApplicationDto, PaginatedApplicationsDto,
            UpdateApplicationStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::application::ApplicationStatus,
        service::{application::ApplicationService, pet::PetService},
        state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Query parameters for the application listing.
#[derive(Deserialize)]
pub struct ApplicationQueryParam {
    /// When set, lists a rescue's incoming applications instead of the
    /// caller's own.
    pub rescue_id: Option<i32>,
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

fn parse_status(value: &str) -> Result<ApplicationStatus, AppError> {
    ApplicationStatus::from_input(value)
        .ok_or_else(|| AppError::BadRequest(format!("unknown application status '{}'", value)))
}

/// Submit an adoption application.
///
/// One application per adopter per pet, only while the pet is available.
/// The rescue's staff are notified.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/v1/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Pending application", body = ApplicationDto),
        (status = 400, description = "Pet not available or duplicate application", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such pet", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let application = ApplicationService::new(&state.db)
        .submit(caller.id, payload.pet_id, &payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// List applications.
///
/// Without `rescue_id`, lists the caller's own applications. With
/// `rescue_id`, lists the rescue's incoming applications (staff only),
/// optionally filtered by status.
///
/// # Access Control
/// - Own applications: any authenticated user
/// - `ReviewApplications` - For the `rescue_id` variant
#[utoipa::path(
    get,
    path = "/api/v1/applications",
    tag = APPLICATION_TAG,
    params(
        ("rescue_id" = Option<i32>, Query, description = "List a rescue's incoming applications (staff only)"),
        ("status" = Option<String>, Query, description = "Filter by status (rescue listing only)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated applications", body = PaginatedApplicationsDto),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff of this rescue", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ApplicationQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let service = ApplicationService::new(&state.db);

    let applications = match params.rescue_id {
        Some(rescue_id) => {
            let _ = guard
                .require(&[Permission::ReviewApplications(rescue_id)])
                .await?;
            let status = params.status.as_deref().map(parse_status).transpose()?;
            service
                .get_for_rescue(rescue_id, status, params.page, params.per_page)
                .await?
        }
        None => {
            let caller = guard.require(&[]).await?;
            service
                .get_mine(caller.id, params.page, params.per_page)
                .await?
        }
    };

    Ok((StatusCode::OK, Json(applications.into_dto())))
}

/// Get a single application.
///
/// # Access Control
/// - The applicant, or `ReviewApplications` for the pet's rescue
#[utoipa::path(
    get,
    path = "/api/v1/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "The application", body = ApplicationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the applicant or rescue staff", body = ErrorDto),
        (status = 404, description = "No such application", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let caller = guard.require(&[]).await?;

    let application = ApplicationService::new(&state.db).get(id).await?;
    if application.user_id != caller.id {
        let pet = PetService::new(&state.db).get_pet(application.pet_id).await?;
        let _ = guard
            .require(&[Permission::ReviewApplications(pet.rescue_id)])
            .await?;
    }

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Decide a pending application.
///
/// Accepts `approved` or `rejected`. Approval marks the pet pending, opens
/// a chat with the applicant, and notifies them; rejection notifies them.
/// The decision is recorded in the audit trail.
///
/// # Access Control
/// - `ReviewApplications` - Staff of the pet's rescue, or admins
#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Decided application", body = ApplicationDto),
        (status = 400, description = "Invalid decision or application not pending", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff of this rescue", body = ErrorDto),
        (status = 404, description = "No such application", body = ErrorDto)
    ),
)]
pub async fn decide_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ApplicationService::new(&state.db);
    let existing = service.get(id).await?;
    let pet = PetService::new(&state.db).get_pet(existing.pet_id).await?;

    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ReviewApplications(pet.rescue_id)])
        .await?;

    let decision = parse_status(&payload.status)?;
    let application = service.decide(caller.id, id, decision).await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Withdraw an application.
///
/// Applicants may withdraw their own applications while they are still
/// pending.
///
/// # Access Control
/// - The applicant only
#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}/withdraw",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Withdrawn application", body = ApplicationDto),
        (status = 400, description = "Application already decided", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such application", body = ErrorDto)
    ),
)]
pub async fn withdraw_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let application = ApplicationService::new(&state.db)
        .withdraw(caller.id, id)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}
