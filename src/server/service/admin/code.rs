//! One-time setup codes for bootstrapping the first admin.
//!
//! When the server starts with no admin account, it generates a setup code
//! and prints it to the log. Whoever submits that code is promoted to admin.
//! Codes live in memory with a ten-minute TTL and are consumed on first
//! successful use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const SETUP_CODE_TTL_SECONDS: u64 = 10 * 60;

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the temporary setup code used to create the first admin.
#[derive(Clone)]
pub struct SetupCodeService {
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    /// Creates a new SetupCodeService instance.
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random setup code and stores it with a ten-minute TTL.
    ///
    /// # Returns
    /// The generated code string.
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.code.write().await = Some(SetupCode::new(code_string.clone()));
        code_string
    }

    /// Validates the provided code against the stored setup code.
    ///
    /// A successful validation consumes the code so it cannot be reused.
    /// Expired codes are cleared and fail validation.
    ///
    /// # Returns
    /// `true` if the code matched and had not expired.
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a cryptographically secure random alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if a valid, non-expired code is currently stored.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }

    /// Forces the stored code to expire immediately.
    #[cfg(test)]
    pub async fn force_expire(&self) {
        let mut code = self.code.write().await;
        if let Some(stored_code) = code.as_mut() {
            stored_code.expires_at = Instant::now();
        }
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generate_stores_a_code() {
        let service = SetupCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(service.has_valid_code().await);
    }

    #[tokio::test]
    async fn correct_code_validates_once() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
    }

    #[tokio::test]
    async fn wrong_code_fails_without_consuming() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(!service.validate_and_consume("wrong").await);
        assert!(service.validate_and_consume(&code).await);
    }

    #[tokio::test]
    async fn expired_code_fails() {
        let service = SetupCodeService::new();
        let code = service.generate().await;
        service.force_expire().await;

        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    #[tokio::test]
    async fn regenerating_replaces_the_code() {
        let service = SetupCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert!(!service.validate_and_consume(&first).await);
        assert!(service.validate_and_consume(&second).await);
    }
}
