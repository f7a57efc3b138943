use crate::{
    client::model::error::ApiError,
    model::rescue::{
        AddStaffDto, CreateRescueDto, PaginatedRescuesDto, RescueDto, StaffMemberDto,
        UpdateRescueDto, UpdateStaffDto,
    },
};

use super::helper::{parse_empty_response, parse_response, send_request, ApiClient};

/// POST /api/v1/rescues
/// Register a rescue organization (admin only)
pub async fn create_rescue(client: &ApiClient, dto: CreateRescueDto) -> Result<RescueDto, ApiError> {
    let response = send_request(client.post("/api/v1/rescues").json(&dto)).await?;
    parse_response(response).await
}

/// GET /api/v1/rescues
/// Get paginated rescue organizations
pub async fn get_rescues(
    client: &ApiClient,
    page: u64,
    per_page: u64,
) -> Result<PaginatedRescuesDto, ApiError> {
    let path = format!("/api/v1/rescues?page={}&per_page={}", page, per_page);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// GET /api/v1/rescues/{id}
/// Get a rescue by ID
pub async fn get_rescue(client: &ApiClient, id: i32) -> Result<RescueDto, ApiError> {
    let path = format!("/api/v1/rescues/{}", id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// PUT /api/v1/rescues/{id}
/// Update a rescue's profile (coordinator or admin)
pub async fn update_rescue(
    client: &ApiClient,
    id: i32,
    dto: UpdateRescueDto,
) -> Result<RescueDto, ApiError> {
    let path = format!("/api/v1/rescues/{}", id);
    let response = send_request(client.put(&path).json(&dto)).await?;
    parse_response(response).await
}

/// DELETE /api/v1/rescues/{id}
/// Delete a rescue organization (admin only)
pub async fn delete_rescue(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let path = format!("/api/v1/rescues/{}", id);
    let response = send_request(client.delete(&path)).await?;
    parse_empty_response(response).await
}

/// GET /api/v1/rescues/{id}/staff
/// Get the rescue's staff roster (staff or admin)
pub async fn get_staff(client: &ApiClient, rescue_id: i32) -> Result<Vec<StaffMemberDto>, ApiError> {
    let path = format!("/api/v1/rescues/{}/staff", rescue_id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// POST /api/v1/rescues/{id}/staff
/// Add a user to the staff roster by email (coordinator or admin)
pub async fn add_staff(
    client: &ApiClient,
    rescue_id: i32,
    dto: AddStaffDto,
) -> Result<StaffMemberDto, ApiError> {
    let path = format!("/api/v1/rescues/{}/staff", rescue_id);
    let response = send_request(client.post(&path).json(&dto)).await?;
    parse_response(response).await
}

/// PUT /api/v1/rescues/{id}/staff/{user_id}
/// Change a staff member's coordinator flag (coordinator or admin)
pub async fn update_staff(
    client: &ApiClient,
    rescue_id: i32,
    user_id: i32,
    dto: UpdateStaffDto,
) -> Result<StaffMemberDto, ApiError> {
    let path = format!("/api/v1/rescues/{}/staff/{}", rescue_id, user_id);
    let response = send_request(client.put(&path).json(&dto)).await?;
    parse_response(response).await
}

/// DELETE /api/v1/rescues/{id}/staff/{user_id}
/// Remove a user from the staff roster (coordinator or admin)
pub async fn remove_staff(
    client: &ApiClient,
    rescue_id: i32,
    user_id: i32,
) -> Result<(), ApiError> {
    let path = format!("/api/v1/rescues/{}/staff/{}", rescue_id, user_id);
    let response = send_request(client.delete(&path)).await?;
    parse_empty_response(response).await
}
