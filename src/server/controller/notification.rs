use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, notification::PaginatedNotificationsDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::notification::GetNotificationsParam,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Query parameters for the notification inbox.
#[derive(Deserialize)]
pub struct NotificationQueryParam {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// List the caller's notifications.
///
/// Newest first, optionally unread only.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("unread_only" = Option<bool>, Query, description = "Only unread notifications (default: false)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<NotificationQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let notifications = NotificationService::new(&state.db)
        .get_notifications(GetNotificationsParam {
            user_id: caller.id,
            unread_only: params.unread_only,
            page: params.page,
            per_page: params.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// Mark one notification as read.
///
/// # Access Control
/// - The notification's owner only
#[utoipa::path(
    put,
    path = "/api/v1/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification marked read"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such notification", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    NotificationService::new(&state.db)
        .mark_read(caller.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark every notification as read.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    put,
    path = "/api/v1/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 204, description = "All notifications marked read"),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    NotificationService::new(&state.db)
        .mark_all_read(caller.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
