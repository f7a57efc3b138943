//! User domain models and parameters.
//!
//! Provides domain models for platform accounts. The domain model carries the
//! stored password hash for credential checks in the auth service; it is never
//! exposed through the DTO conversion.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, UserDto};

/// Platform account with credentials and admin flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// bcrypt hash of the password; never serialized.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the user has platform-wide admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            admin: entity.admin,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here and never leaves the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            admin: self.admin,
            created_at: self.created_at,
        }
    }

    /// The user's display name, as rendered in chats and staff lists.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Parameters for creating a user during registration.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    /// Already-hashed password; hashing happens in the auth service.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Parameters for updating a user's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
