use crate::{
    client::model::error::ApiError,
    model::pet::{CreatePetDto, PaginatedPetsDto, PetDto, RatePetDto, RatingDto, UpdatePetDto},
};

use super::helper::{parse_empty_response, parse_response, send_request, ApiClient};

/// Optional filters for the pet listing.
#[derive(Default)]
pub struct PetFilter {
    pub species: Option<String>,
    pub status: Option<String>,
    pub rescue_id: Option<i32>,
}

/// GET /api/v1/pets
/// Get paginated pets, optionally filtered by species, status, and rescue
pub async fn get_pets(
    client: &ApiClient,
    filter: &PetFilter,
    page: u64,
    per_page: u64,
) -> Result<PaginatedPetsDto, ApiError> {
    let mut query = vec![
        ("page".to_string(), page.to_string()),
        ("per_page".to_string(), per_page.to_string()),
    ];
    if let Some(species) = &filter.species {
        query.push(("species".to_string(), species.clone()));
    }
    if let Some(status) = &filter.status {
        query.push(("status".to_string(), status.clone()));
    }
    if let Some(rescue_id) = filter.rescue_id {
        query.push(("rescue_id".to_string(), rescue_id.to_string()));
    }

    let response = send_request(client.get("/api/v1/pets").query(&query)).await?;
    parse_response(response).await
}

/// GET /api/v1/pets/discover
/// Get the swipe feed of available pets the caller has not rated yet
pub async fn discover(client: &ApiClient, limit: Option<u64>) -> Result<Vec<PetDto>, ApiError> {
    let path = match limit {
        Some(limit) => format!("/api/v1/pets/discover?limit={}", limit),
        None => "/api/v1/pets/discover".to_string(),
    };
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// GET /api/v1/pets/liked
/// Get the pets the caller has right-swiped
pub async fn get_liked_pets(client: &ApiClient) -> Result<Vec<PetDto>, ApiError> {
    let response = send_request(client.get("/api/v1/pets/liked")).await?;
    parse_response(response).await
}

/// GET /api/v1/pets/{id}
/// Get a pet by ID
pub async fn get_pet(client: &ApiClient, id: i32) -> Result<PetDto, ApiError> {
    let path = format!("/api/v1/pets/{}", id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// POST /api/v1/pets
/// Create a pet listing (staff of the owning rescue)
pub async fn create_pet(client: &ApiClient, dto: CreatePetDto) -> Result<PetDto, ApiError> {
    let response = send_request(client.post("/api/v1/pets").json(&dto)).await?;
    parse_response(response).await
}

/// PUT /api/v1/pets/{id}
/// Update a pet listing (staff of the owning rescue)
pub async fn update_pet(client: &ApiClient, id: i32, dto: UpdatePetDto) -> Result<PetDto, ApiError> {
    let path = format!("/api/v1/pets/{}", id);
    let response = send_request(client.put(&path).json(&dto)).await?;
    parse_response(response).await
}

/// DELETE /api/v1/pets/{id}
/// Delete a pet listing (staff of the owning rescue)
pub async fn delete_pet(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let path = format!("/api/v1/pets/{}", id);
    let response = send_request(client.delete(&path)).await?;
    parse_empty_response(response).await
}

/// POST /api/v1/pets/{id}/rating
/// Record or update the caller's swipe verdict on a pet
pub async fn rate_pet(client: &ApiClient, id: i32, liked: bool) -> Result<RatingDto, ApiError> {
    let path = format!("/api/v1/pets/{}/rating", id);
    let response = send_request(client.post(&path).json(&RatePetDto { liked })).await?;
    parse_response(response).await
}
