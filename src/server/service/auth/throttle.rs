//! In-memory login throttling.
//!
//! Tracks failed login attempts per email address. After five failures within
//! a fifteen-minute window, further attempts for that email are refused until
//! the oldest failure ages out. The state lives in memory only; a restart
//! clears it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::server::error::auth::AuthError;

/// Failures allowed inside the window before throttling kicks in.
const MAX_FAILURES: usize = 5;

/// Length of the sliding failure window.
const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Service tracking failed login attempts per email.
#[derive(Clone)]
pub struct LoginThrottleService {
    failures: Arc<RwLock<HashMap<String, Vec<Instant>>>>,
}

impl LoginThrottleService {
    /// Creates a new LoginThrottleService instance.
    pub fn new() -> Self {
        Self {
            failures: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Checks whether a login attempt for this email is currently allowed.
    ///
    /// Expired failures are pruned as a side effect.
    ///
    /// # Returns
    /// - `Ok(())` - Attempt may proceed
    /// - `Err(AuthError::Throttled)` - Too many recent failures, with the
    ///   seconds until the oldest failure leaves the window
    pub async fn check(&self, email: &str) -> Result<(), AuthError> {
        let mut failures = self.failures.write().await;
        let now = Instant::now();

        let Some(attempts) = failures.get_mut(email) else {
            return Ok(());
        };
        attempts.retain(|at| now.duration_since(*at) < WINDOW);

        if attempts.len() < MAX_FAILURES {
            if attempts.is_empty() {
                failures.remove(email);
            }
            return Ok(());
        }

        let oldest = attempts[0];
        let retry_after = WINDOW.saturating_sub(now.duration_since(oldest));
        Err(AuthError::Throttled {
            retry_after_secs: retry_after.as_secs().max(1),
        })
    }

    /// Records a failed login attempt for an email.
    pub async fn record_failure(&self, email: &str) {
        let mut failures = self.failures.write().await;
        failures
            .entry(email.to_string())
            .or_default()
            .push(Instant::now());
    }

    /// Clears the failure history for an email after a successful login.
    pub async fn clear(&self, email: &str) {
        self.failures.write().await.remove(email);
    }

    /// Shifts all recorded failures for an email into the past.
    #[cfg(test)]
    pub async fn backdate(&self, email: &str, by: Duration) {
        let mut failures = self.failures.write().await;
        if let Some(attempts) = failures.get_mut(email) {
            for at in attempts.iter_mut() {
                *at -= by;
            }
        }
    }
}

impl Default for LoginThrottleService {
    fn default() -> Self {
        Self::new()
    }
}
