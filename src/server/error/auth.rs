use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent on a protected endpoint.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token could not be decoded or has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or expired bearer token")]
    InvalidToken,

    /// The token decoded to a user id that no longer exists.
    ///
    /// Happens when an account is deleted while a token for it is still in
    /// circulation. Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// The two cases are deliberately indistinguishable to the client.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The authenticated user lacks the permission required by the endpoint.
    ///
    /// The detail string is logged for diagnostics; the client only sees a
    /// generic message. Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Too many failed logins for this email inside the throttle window.
    ///
    /// Results in a 429 Too Many Requests response with a `Retry-After` header.
    #[error("Too many failed login attempts, retry in {retry_after_secs}s")]
    Throttled { retry_after_secs: u64 },

    /// Registration attempted with an email that already has an account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Email is already registered")]
    EmailTaken,

    /// The submitted admin setup code is wrong, expired, or already used.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid setup code")]
    InvalidSetupCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 with "Authentication required"
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `AccessDenied` → 403 with a generic message (detail logged server-side)
/// - `Throttled` → 429 with a `Retry-After` header
/// - `EmailTaken` / `InvalidSetupCode` → 400
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotInDatabase(_) => {
                debug!("Rejected request: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, detail) => {
                debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to do that".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Throttled { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                Json(ErrorDto {
                    error: "Too many failed login attempts, please try again later".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "An account with this email already exists".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidSetupCode => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid or expired setup code".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
