use crate::{client::model::error::ApiError, model::notification::PaginatedNotificationsDto};

use super::helper::{parse_empty_response, parse_response, send_request, ApiClient};

/// GET /api/v1/notifications
/// Get the caller's notifications, newest first
pub async fn get_notifications(
    client: &ApiClient,
    unread_only: bool,
    page: u64,
    per_page: u64,
) -> Result<PaginatedNotificationsDto, ApiError> {
    let path = format!(
        "/api/v1/notifications?unread_only={}&page={}&per_page={}",
        unread_only, page, per_page
    );
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// PUT /api/v1/notifications/{id}/read
/// Mark one notification as read
pub async fn mark_read(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let path = format!("/api/v1/notifications/{}/read", id);
    let response = send_request(client.put(&path)).await?;
    parse_empty_response(response).await
}

/// PUT /api/v1/notifications/read-all
/// Mark every notification as read
pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiError> {
    let response = send_request(client.put("/api/v1/notifications/read-all")).await?;
    parse_empty_response(response).await
}
