use crate::{
    client::model::error::ApiError,
    model::user::{PaginatedUsersDto, UpdateUserDto, UserDto},
};

use super::helper::{parse_empty_response, parse_response, send_request, ApiClient};

/// GET /api/v1/users
/// Get paginated user accounts (admin only)
pub async fn get_users(
    client: &ApiClient,
    page: u64,
    per_page: u64,
) -> Result<PaginatedUsersDto, ApiError> {
    let path = format!("/api/v1/users?page={}&per_page={}", page, per_page);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// GET /api/v1/users/{id}
/// Get a user by ID (self or admin)
pub async fn get_user(client: &ApiClient, id: i32) -> Result<UserDto, ApiError> {
    let path = format!("/api/v1/users/{}", id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// PUT /api/v1/users/{id}
/// Update a user's profile (self or admin)
pub async fn update_user(
    client: &ApiClient,
    id: i32,
    dto: UpdateUserDto,
) -> Result<UserDto, ApiError> {
    let path = format!("/api/v1/users/{}", id);
    let response = send_request(client.put(&path).json(&dto)).await?;
    parse_response(response).await
}

/// DELETE /api/v1/users/{id}
/// Delete a user account (admin only)
pub async fn delete_user(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let path = format!("/api/v1/users/{}", id);
    let response = send_request(client.delete(&path)).await?;
    parse_empty_response(response).await
}
