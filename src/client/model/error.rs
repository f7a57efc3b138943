use std::time::Duration;

/// Error returned by API client calls.
///
/// Carries the HTTP status code (or 0 when the request never reached the
/// server) plus a human-readable message taken from the API error body when
/// one was present.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// Base delay for retry backoff.
const RETRY_BASE_MS: u64 = 500;

/// Retry delays never exceed this.
const RETRY_MAX_MS: u64 = 30_000;

impl ApiError {
    /// Message suitable for showing directly to an end user.
    ///
    /// Server errors are collapsed into a generic message since their bodies
    /// may contain internals not worth surfacing.
    pub fn user_message(&self) -> String {
        match self.status {
            0 => "Could not reach the server. Check your connection.".to_string(),
            500..=599 => "Something went wrong on our end. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }

    /// Whether retrying the same request may succeed.
    ///
    /// Covers transport failures, timeouts, throttling, and server errors.
    /// Client errors (4xx other than 408/429) are permanent.
    pub fn is_retryable(&self) -> bool {
        matches!(self.status, 0 | 408 | 429) || (500..600).contains(&self.status)
    }

    /// Suggested delay before retry `attempt` (0-based), or `None` when the
    /// error is not worth retrying.
    ///
    /// Doubles from 500ms per attempt, capped at 30 seconds.
    pub fn retry_delay(&self, attempt: u32) -> Option<Duration> {
        if !self.is_retryable() {
            return None;
        }
        let ms = RETRY_BASE_MS
            .saturating_mul(1u64 << attempt.min(16))
            .min(RETRY_MAX_MS);
        Some(Duration::from_millis(ms))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ApiError;

    fn err(status: u16) -> ApiError {
        ApiError {
            status,
            message: "boom".to_string(),
        }
    }

    /// Tests which statuses are considered worth retrying.
    ///
    /// Expected: transport errors, 408, 429, and 5xx retry; other 4xx do not
    #[test]
    fn retryable_statuses() {
        assert!(err(0).is_retryable());
        assert!(err(408).is_retryable());
        assert!(err(429).is_retryable());
        assert!(err(500).is_retryable());
        assert!(err(503).is_retryable());

        assert!(!err(400).is_retryable());
        assert!(!err(401).is_retryable());
        assert!(!err(404).is_retryable());
    }

    /// Tests the retry backoff curve.
    ///
    /// Expected: 500ms doubling per attempt, capped at 30s
    #[test]
    fn retry_delay_doubles_and_caps() {
        let e = err(503);

        assert_eq!(e.retry_delay(0), Some(Duration::from_millis(500)));
        assert_eq!(e.retry_delay(1), Some(Duration::from_millis(1000)));
        assert_eq!(e.retry_delay(2), Some(Duration::from_millis(2000)));
        assert_eq!(e.retry_delay(10), Some(Duration::from_millis(30_000)));
        assert_eq!(e.retry_delay(63), Some(Duration::from_millis(30_000)));
    }

    /// Tests that permanent errors carry no retry suggestion.
    ///
    /// Expected: None for 4xx other than 408/429, regardless of attempt
    #[test]
    fn no_retry_delay_for_permanent_errors() {
        assert_eq!(err(400).retry_delay(0), None);
        assert_eq!(err(404).retry_delay(3), None);
        assert_eq!(err(409).retry_delay(0), None);
    }

    /// Tests that server errors are masked in user-facing messages.
    ///
    /// Expected: 4xx messages pass through, 5xx and transport errors do not
    #[test]
    fn user_message_masks_server_errors() {
        assert_eq!(err(400).user_message(), "boom");
        assert!(err(500).user_message().contains("try again"));
        assert!(err(0).user_message().contains("connection"));
    }
}
