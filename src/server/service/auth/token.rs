//! JWT issuing and verification.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Token lifetime in seconds (24 hours).
const TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24;

/// Claims carried by every issued token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry as a unix timestamp.
    pub exp: i64,
    /// Issued-at as a unix timestamp.
    pub iat: i64,
    /// The authenticated user's ID.
    pub id: i32,
}

/// Signs a bearer token for a user.
///
/// # Returns
/// - `Ok(String)` - Signed token valid for 24 hours
/// - `Err(AppError::InternalErr)` - Signing failure
pub fn issue_token(secret: &str, user_id: i32) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        exp: now + TOKEN_TTL_SECONDS,
        iat: now,
        id: user_id,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(InternalError::TokenSigning)?;

    Ok(token)
}

/// Verifies a bearer token and extracts its claims.
///
/// Expired or tampered tokens are rejected without distinguishing the cause
/// to the caller.
///
/// # Returns
/// - `Ok(Claims)` - Verified claims
/// - `Err(AppError::AuthErr)` - Invalid, expired, or malformed token
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::InvalidToken)?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let token = issue_token("test-secret", 42).unwrap();
        let claims = verify_token("test-secret", &token).unwrap();

        assert_eq!(claims.id, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = issue_token("test-secret", 42).unwrap();
        assert!(verify_token("other-secret", &token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(verify_token("test-secret", "not.a.token").is_err());
    }
}
