use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        pet::{CreatePetDto, PaginatedPetsDto, PetDto, RatePetDto, RatingDto, UpdatePetDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pet::{PetFilterParam, PetStatus, Species},
        service::pet::{CreatePetRequest, PetService, UpdatePetRequest},
        state::AppState,
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pet";

/// Filter and pagination query parameters for the pet listing.
#[derive(Deserialize)]
pub struct PetQueryParam {
    pub species: Option<String>,
    pub status: Option<String>,
    pub rescue_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// Query parameters for the discovery feed.
#[derive(Deserialize)]
pub struct DiscoverParam {
    pub limit: Option<u64>,
}

fn parse_species(value: &str) -> Result<Species, AppError> {
    Species::from_input(value)
        .ok_or_else(|| AppError::BadRequest(format!("unknown species '{}'", value)))
}

fn parse_status(value: &str) -> Result<PetStatus, AppError> {
    PetStatus::from_input(value)
        .ok_or_else(|| AppError::BadRequest(format!("unknown pet status '{}'", value)))
}

/// List pets with optional filters.
///
/// Filters by species, status, and rescue; results are paginated, newest
/// listing first.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/pets",
    tag = PET_TAG,
    params(
        ("species" = Option<String>, Query, description = "Filter by species"),
        ("status" = Option<String>, Query, description = "Filter by adoption status"),
        ("rescue_id" = Option<i32>, Query, description = "Filter by rescue"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated pets", body = PaginatedPetsDto),
        (status = 400, description = "Unknown species or status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_pets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PetQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let species = params.species.as_deref().map(parse_species).transpose()?;
    let status = params.status.as_deref().map(parse_status).transpose()?;

    let pets = PetService::new(&state.db)
        .get_pets(PetFilterParam {
            species,
            status,
            rescue_id: params.rescue_id,
            page: params.page,
            per_page: params.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(pets.into_dto())))
}

/// Serve the discovery feed.
///
/// Returns available pets the caller has not rated yet, oldest listings
/// first, for card-swiping clients.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/pets/discover",
    tag = PET_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Feed size (default and max: 20)")
    ),
    responses(
        (status = 200, description = "Unrated available pets", body = Vec<PetDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn discover(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DiscoverParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let pets = PetService::new(&state.db)
        .discover(caller.id, params.limit)
        .await?;
    let pets_dto: Vec<_> = pets.into_iter().map(|pet| pet.into_dto()).collect();

    Ok((StatusCode::OK, Json(pets_dto)))
}

/// List the pets the caller has liked.
///
/// Most recent like first. Pets deleted since the like are skipped.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/pets/liked",
    tag = PET_TAG,
    responses(
        (status = 200, description = "Liked pets", body = Vec<PetDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_liked_pets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let pets = PetService::new(&state.db).get_liked_pets(caller.id).await?;
    let pets_dto: Vec<_> = pets.into_iter().map(|pet| pet.into_dto()).collect();

    Ok((StatusCode::OK, Json(pets_dto)))
}

/// Get a single pet.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/pets/{id}",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "The pet", body = PetDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such pet", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let pet = PetService::new(&state.db).get_pet(id).await?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// List a pet for adoption.
///
/// New pets always start `available`. The markdown description is sanitized
/// and rendered at write time, and the listing is recorded in the audit
/// trail.
///
/// # Access Control
/// - `ManagePets` - Staff of the pet's rescue, or admins
#[utoipa::path(
    post,
    path = "/api/v1/pets",
    tag = PET_TAG,
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Pet listed", body = PetDto),
        (status = 400, description = "Invalid pet data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff of this rescue", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManagePets(payload.rescue_id)])
        .await?;

    let species = parse_species(&payload.species)?;
    let pet = PetService::new(&state.db)
        .create_pet(
            caller.id,
            CreatePetRequest {
                rescue_id: payload.rescue_id,
                name: payload.name,
                species,
                breed: payload.breed,
                age_months: payload.age_months,
                description: payload.description,
                photo_url: payload.photo_url,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(pet.into_dto())))
}

/// Update a pet's listing.
///
/// Staff set the final `adopted` status through this endpoint once an
/// adoption completes.
///
/// # Access Control
/// - `ManagePets` - Staff of the pet's rescue, or admins
#[utoipa::path(
    put,
    path = "/api/v1/pets/{id}",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "Updated pet", body = PetDto),
        (status = 400, description = "Invalid pet data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff of this rescue", body = ErrorDto),
        (status = 404, description = "No such pet", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);
    let existing = service.get_pet(id).await?;

    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManagePets(existing.rescue_id)])
        .await?;

    let species = parse_species(&payload.species)?;
    let status = parse_status(&payload.status)?;
    let pet = service
        .update_pet(
            caller.id,
            UpdatePetRequest {
                id,
                name: payload.name,
                species,
                breed: payload.breed,
                age_months: payload.age_months,
                status,
                description: payload.description,
                photo_url: payload.photo_url,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// Remove a pet's listing.
///
/// # Access Control
/// - `ManagePets` - Staff of the pet's rescue, or admins
#[utoipa::path(
    delete,
    path = "/api/v1/pets/{id}",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 204, description = "Pet removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff of this rescue", body = ErrorDto),
        (status = 404, description = "No such pet", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);
    let existing = service.get_pet(id).await?;

    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::ManagePets(existing.rescue_id)])
        .await?;

    service.delete_pet(caller.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rate a pet.
///
/// Upserts the caller's liked/passed verdict; re-rating replaces the
/// earlier verdict. Rated pets drop out of the caller's discovery feed.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/v1/pets/{id}/rating",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    request_body = RatePetDto,
    responses(
        (status = 200, description = "Stored rating", body = RatingDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such pet", body = ErrorDto)
    ),
)]
pub async fn rate_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<RatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let rating = PetService::new(&state.db)
        .rate_pet(caller.id, id, payload.liked)
        .await?;

    Ok((StatusCode::OK, Json(rating.into_dto())))
}
