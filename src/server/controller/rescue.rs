use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        rescue::{
            AddStaffDto, CreateRescueDto, PaginatedRescuesDto, RescueDto, StaffMemberDto,
            UpdateRescueDto, UpdateStaffDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::rescue::RescueService,
        state::AppState,
    },
};

/// Tag for grouping rescue endpoints in OpenAPI documentation
pub static RESCUE_TAG: &str = "rescue";

/// Register a new rescue organization.
///
/// Creates the rescue with a markdown description that is sanitized and
/// rendered at write time. Rescue onboarding is an admin operation; staff
/// are added to the new rescue afterwards.
///
/// # Access Control
/// - `Admin` - Only admins can register rescues
///
/// # Returns
/// - `201 Created` - The created rescue
/// - `400 Bad Request` - Empty name
#[utoipa::path(
    post,
    path = "/api/v1/rescues",
    tag = RESCUE_TAG,
    request_body = CreateRescueDto,
    responses(
        (status = 201, description = "Rescue created", body = RescueDto),
        (status = 400, description = "Invalid rescue data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_rescue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRescueDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rescue = RescueService::new(&state.db)
        .create_rescue(
            caller.id,
            &payload.name,
            &payload.email,
            &payload.city,
            &payload.description,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(rescue.into_dto())))
}

/// List rescue organizations.
///
/// Returns a paginated list of all rescues, ordered by name.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/rescues",
    tag = RESCUE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated rescues", body = PaginatedRescuesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_rescues(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let rescues = RescueService::new(&state.db)
        .get_all_rescues(params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(rescues.into_dto())))
}

/// Get a single rescue.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/rescues/{id}",
    tag = RESCUE_TAG,
    params(
        ("id" = i32, Path, description = "Rescue ID")
    ),
    responses(
        (status = 200, description = "The rescue", body = RescueDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such rescue", body = ErrorDto)
    ),
)]
pub async fn get_rescue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let rescue = RescueService::new(&state.db).get_rescue(id).await?;

    Ok((StatusCode::OK, Json(rescue.into_dto())))
}

/// Update a rescue's profile.
///
/// Re-renders the markdown description and records the change in the audit
/// trail.
///
/// # Access Control
/// - `ManageRescue` - Coordinators of the rescue, or admins
#[utoipa::path(
    put,
    path = "/api/v1/rescues/{id}",
    tag = RESCUE_TAG,
    params(
        ("id" = i32, Path, description = "Rescue ID")
    ),
    request_body = UpdateRescueDto,
    responses(
        (status = 200, description = "Updated rescue", body = RescueDto),
        (status = 400, description = "Invalid rescue data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coordinator of this rescue", body = ErrorDto),
        (status = 404, description = "No such rescue", body = ErrorDto)
    ),
)]
pub async fn update_rescue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRescueDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManageRescue(id)])
        .await?;

    let rescue = RescueService::new(&state.db)
        .update_rescue(
            caller.id,
            id,
            &payload.name,
            &payload.email,
            &payload.city,
            &payload.description,
        )
        .await?;

    Ok((StatusCode::OK, Json(rescue.into_dto())))
}

/// Delete a rescue.
///
/// Removes the rescue and, via cascades, its pets, staff roster, and chats.
///
/// # Access Control
/// - `Admin` - Only admins can delete rescues
#[utoipa::path(
    delete,
    path = "/api/v1/rescues/{id}",
    tag = RESCUE_TAG,
    params(
        ("id" = i32, Path, description = "Rescue ID")
    ),
    responses(
        (status = 204, description = "Rescue deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "No such rescue", body = ErrorDto)
    ),
)]
pub async fn delete_rescue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::Admin])
        .await?;

    RescueService::new(&state.db).delete_rescue(caller.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a rescue's staff roster.
///
/// # Access Control
/// - `ViewStaff` - Staff of the rescue, or admins
#[utoipa::path(
    get,
    path = "/api/v1/rescues/{id}/staff",
    tag = RESCUE_TAG,
    params(
        ("id" = i32, Path, description = "Rescue ID")
    ),
    responses(
        (status = 200, description = "Staff roster", body = Vec<StaffMemberDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff of this rescue", body = ErrorDto),
        (status = 404, description = "No such rescue", body = ErrorDto)
    ),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ViewStaff(id)])
        .await?;

    let staff = RescueService::new(&state.db).get_staff(id).await?;
    let staff_dto: Vec<_> = staff.into_iter().map(|member| member.into_dto()).collect();

    Ok((StatusCode::OK, Json(staff_dto)))
}

/// Add a user to a rescue's staff.
///
/// The user is addressed by the email of their existing account.
///
/// # Access Control
/// - `ManageStaff` - Coordinators of the rescue, or admins
#[utoipa::path(
    post,
    path = "/api/v1/rescues/{id}/staff",
    tag = RESCUE_TAG,
    params(
        ("id" = i32, Path, description = "Rescue ID")
    ),
    request_body = AddStaffDto,
    responses(
        (status = 201, description = "Staff member added", body = StaffMemberDto),
        (status = 400, description = "Already staff at this rescue", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coordinator of this rescue", body = ErrorDto),
        (status = 404, description = "No account with that email", body = ErrorDto)
    ),
)]
pub async fn add_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AddStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManageStaff(id)])
        .await?;

    let membership = RescueService::new(&state.db)
        .add_staff(caller.id, id, &payload.email, payload.coordinator)
        .await?;

    Ok((StatusCode::CREATED, Json(membership.into_dto())))
}

/// Change a staff member's coordinator flag.
///
/// # Access Control
/// - `ManageStaff` - Coordinators of the rescue, or admins
#[utoipa::path(
    put,
    path = "/api/v1/rescues/{id}/staff/{user_id}",
    tag = RESCUE_TAG,
    params(
        ("id" = i32, Path, description = "Rescue ID"),
        ("user_id" = i32, Path, description = "Staff member's user ID")
    ),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Updated membership", body = StaffMemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coordinator of this rescue", body = ErrorDto),
        (status = 404, description = "User is not staff at this rescue", body = ErrorDto)
    ),
)]
pub async fn update_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManageStaff(id)])
        .await?;

    let membership = RescueService::new(&state.db)
        .set_coordinator(caller.id, id, user_id, payload.coordinator)
        .await?;

    Ok((StatusCode::OK, Json(membership.into_dto())))
}

/// Remove a staff member from a rescue.
///
/// # Access Control
/// - `ManageStaff` - Coordinators of the rescue, or admins
#[utoipa::path(
    delete,
    path = "/api/v1/rescues/{id}/staff/{user_id}",
    tag = RESCUE_TAG,
    params(
        ("id" = i32, Path, description = "Rescue ID"),
        ("user_id" = i32, Path, description = "Staff member's user ID")
    ),
    responses(
        (status = 204, description = "Staff member removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coordinator of this rescue", body = ErrorDto),
        (status = 404, description = "User is not staff at this rescue", body = ErrorDto)
    ),
)]
pub async fn remove_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManageStaff(id)])
        .await?;

    RescueService::new(&state.db)
        .remove_staff(caller.id, id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
