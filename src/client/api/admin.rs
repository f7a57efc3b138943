use crate::{
    client::model::error::ApiError,
    model::admin::{PaginatedAuditLogsDto, SetupDto},
};

use super::helper::{parse_empty_response, parse_response, send_request, ApiClient};

/// POST /api/v1/admin/setup
/// Redeem a one-time setup code to promote the caller to admin
pub async fn claim_setup_code(client: &ApiClient, code: &str) -> Result<(), ApiError> {
    let dto = SetupDto {
        code: code.to_string(),
    };
    let response = send_request(client.post("/api/v1/admin/setup").json(&dto)).await?;
    parse_empty_response(response).await
}

/// GET /api/v1/admin/audit-logs
/// Get the audit trail, newest first (admin only)
pub async fn get_audit_logs(
    client: &ApiClient,
    page: u64,
    per_page: u64,
) -> Result<PaginatedAuditLogsDto, ApiError> {
    let path = format!("/api/v1/admin/audit-logs?page={}&per_page={}", page, per_page);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}
