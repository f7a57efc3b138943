use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user account from an email, password, and name, and signs the
/// new user in. The response carries a bearer token valid for 24 hours.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Token and the created account
/// - `400 Bad Request` - Invalid email, name, short password, or email taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and signed in", body = TokenDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.jwt_secret, &state.login_throttle)
        .register(
            &payload.email,
            &payload.password,
            &payload.first_name,
            &payload.last_name,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Sign in with email and password.
///
/// Verifies the credentials and issues a bearer token. Five failed attempts
/// for the same email within fifteen minutes lock the email out until the
/// window passes.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token and the account
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `429 Too Many Requests` - Email locked out, `Retry-After` header set
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 429, description = "Too many failed attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.jwt_secret, &state.login_throttle)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the authenticated account.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The caller's account", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
