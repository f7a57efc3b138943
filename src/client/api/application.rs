use crate::{
    client::model::error::ApiError,
    model::application::{
        ApplicationDto, CreateApplicationDto, PaginatedApplicationsDto, UpdateApplicationStatusDto,
    },
};

use super::helper::{parse_response, send_request, ApiClient};

/// POST /api/v1/applications
/// Submit an adoption application for a pet
pub async fn create_application(
    client: &ApiClient,
    dto: CreateApplicationDto,
) -> Result<ApplicationDto, ApiError> {
    let response = send_request(client.post("/api/v1/applications").json(&dto)).await?;
    parse_response(response).await
}

/// GET /api/v1/applications
/// Get the caller's own applications, paginated
pub async fn get_my_applications(
    client: &ApiClient,
    page: u64,
    per_page: u64,
) -> Result<PaginatedApplicationsDto, ApiError> {
    let path = format!("/api/v1/applications?page={}&per_page={}", page, per_page);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// GET /api/v1/applications?rescue_id={rescue_id}
/// Get applications for a rescue's pets, optionally filtered by status (staff)
pub async fn get_rescue_applications(
    client: &ApiClient,
    rescue_id: i32,
    status: Option<&str>,
    page: u64,
    per_page: u64,
) -> Result<PaginatedApplicationsDto, ApiError> {
    let mut path = format!(
        "/api/v1/applications?rescue_id={}&page={}&per_page={}",
        rescue_id, page, per_page
    );
    if let Some(status) = status {
        path.push_str(&format!("&status={}", status));
    }
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// GET /api/v1/applications/{id}
/// Get an application by ID (applicant or rescue staff)
pub async fn get_application(client: &ApiClient, id: i32) -> Result<ApplicationDto, ApiError> {
    let path = format!("/api/v1/applications/{}", id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// PUT /api/v1/applications/{id}/status
/// Approve or reject a pending application (rescue staff)
pub async fn decide_application(
    client: &ApiClient,
    id: i32,
    status: &str,
) -> Result<ApplicationDto, ApiError> {
    let path = format!("/api/v1/applications/{}/status", id);
    let dto = UpdateApplicationStatusDto {
        status: status.to_string(),
    };
    let response = send_request(client.put(&path).json(&dto)).await?;
    parse_response(response).await
}

/// PUT /api/v1/applications/{id}/withdraw
/// Withdraw the caller's own pending application
pub async fn withdraw_application(client: &ApiClient, id: i32) -> Result<ApplicationDto, ApiError> {
    let path = format!("/api/v1/applications/{}/withdraw", id);
    let response = send_request(client.put(&path)).await?;
    parse_response(response).await
}
