//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - The secret used to sign and verify bearer tokens
//! - Setup code service for first-admin bootstrapping
//! - Login throttle tracking failed sign-in attempts
//! - Typing indicator service for chats

use sea_orm::DatabaseConnection;

use super::service::{
    admin::code::SetupCodeService,
    auth::throttle::LoginThrottleService,
    chat::typing::TypingService,
};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - the in-memory services use `Arc` for shared state
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: String,

    /// Service for managing one-time admin setup codes.
    ///
    /// Used to generate and validate temporary setup codes that allow the
    /// first user to gain admin access when no admin accounts exist.
    pub setup_codes: SetupCodeService,

    /// Sliding-window throttle for failed login attempts.
    pub login_throttle: LoginThrottleService,

    /// In-memory typing indicators keyed by chat and user.
    pub typing: TypingService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized. The resulting state is then provided to the Axum router
    /// for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - Secret for bearer token signing
    /// - `setup_codes` - Service for managing admin setup codes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt_secret: String, setup_codes: SetupCodeService) -> Self {
        Self {
            db,
            jwt_secret,
            setup_codes,
            login_throttle: LoginThrottleService::new(),
            typing: TypingService::new(),
        }
    }
}
