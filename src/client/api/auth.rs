use crate::{
    client::model::error::ApiError,
    model::{
        auth::{LoginDto, RegisterDto, TokenDto},
        user::UserDto,
    },
};

use super::helper::{parse_response, send_request, ApiClient};

/// POST /api/v1/auth/register
/// Create an account and receive a bearer token
pub async fn register(client: &ApiClient, dto: RegisterDto) -> Result<TokenDto, ApiError> {
    let request = client.post("/api/v1/auth/register").json(&dto);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// POST /api/v1/auth/login
/// Sign in with email and password, receiving a bearer token
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<TokenDto, ApiError> {
    let dto = LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    };
    let request = client.post("/api/v1/auth/login").json(&dto);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// GET /api/v1/auth/me
/// Get the account behind the current token
pub async fn me(client: &ApiClient) -> Result<UserDto, ApiError> {
    let request = client.get("/api/v1/auth/me");
    let response = send_request(request).await?;
    parse_response(response).await
}
