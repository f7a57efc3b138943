use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedUsersDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{GetAllUsersParam, UpdateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all user accounts.
///
/// Returns a paginated list of every account on the platform, ordered by
/// name. Only accessible by admins.
///
/// # Access Control
/// - `ManageUsers` - Admins only
///
/// # Returns
/// - `200 OK` - Paginated users
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: params.page,
            per_page: params.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get a single user account.
///
/// Users may fetch their own account; admins may fetch any account.
///
/// # Access Control
/// - Self, or `ManageUsers` for other accounts
///
/// # Returns
/// - `200 OK` - The account
/// - `403 Forbidden` - Another user's account and caller is not an admin
/// - `404 Not Found` - No such account
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The account", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the caller's account", body = ErrorDto),
        (status = 404, description = "No such account", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let caller = guard.require(&[]).await?;
    if caller.id != id {
        guard.require(&[Permission::ManageUsers]).await?;
    }

    let user = UserService::new(&state.db).get_user(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's profile.
///
/// Changes the first and last name. Users may update their own profile;
/// admins may update any profile. Email and password are immutable here.
///
/// # Access Control
/// - Self, or `ManageUsers` for other accounts
///
/// # Returns
/// - `200 OK` - The updated account
/// - `403 Forbidden` - Another user's account and caller is not an admin
/// - `404 Not Found` - No such account
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the caller's account", body = ErrorDto),
        (status = 404, description = "No such account", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let caller = guard.require(&[]).await?;
    if caller.id != id {
        guard.require(&[Permission::ManageUsers]).await?;
    }

    let user = UserService::new(&state.db)
        .update_profile(UpdateUserParam {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account.
///
/// Removes the account and, via cascades, its staff memberships,
/// applications, ratings, chat participations, and notifications. The
/// deletion is recorded in the audit trail. Only accessible by admins.
///
/// # Access Control
/// - `ManageUsers` - Admins only
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `404 Not Found` - No such account
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "No such account", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    UserService::new(&state.db).delete_user(caller.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
