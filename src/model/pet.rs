use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub rescue_id: i32,
    pub name: String,
    /// One of `dog`, `cat`, `rabbit`, `bird`, `other`.
    pub species: String,
    pub breed: Option<String>,
    pub age_months: i32,
    /// One of `available`, `pending`, `adopted`.
    pub status: String,
    pub description_source: String,
    pub description_html: String,
    pub photo_url: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePetDto {
    pub rescue_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: String,
    pub photo_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePetDto {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age_months: i32,
    pub status: String,
    pub description: String,
    pub photo_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPetsDto {
    pub pets: Vec<PetDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Swipe verdict for a pet: `liked: true` is a right-swipe.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RatePetDto {
    pub liked: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RatingDto {
    pub id: i32,
    pub user_id: i32,
    pub pet_id: i32,
    pub liked: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}
