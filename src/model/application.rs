use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub pet_id: i32,
    pub pet_name: String,
    pub user_id: i32,
    pub applicant_name: String,
    /// One of `pending`, `approved`, `rejected`, `withdrawn`.
    pub status: String,
    pub message: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateApplicationDto {
    pub pet_id: i32,
    pub message: String,
}

/// Staff decision on a pending application: `approved` or `rejected`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateApplicationStatusDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedApplicationsDto {
    pub applications: Vec<ApplicationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
