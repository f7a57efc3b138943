//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let rescue = factory::rescue::create_rescue(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, rescue, pet, application) =
//!         factory::helpers::create_application_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("custom@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let pet = factory::pet::PetFactory::new(&db, rescue.id)
//!     .species("cat")
//!     .status("pending")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `rescue` - Create rescue organization entities
//! - `staff_member` - Create staff membership entities
//! - `pet` - Create pet entities
//! - `application` - Create adoption application entities
//! - `chat` - Create chat entities
//! - `chat_participant` - Create chat participant entities
//! - `message` - Create chat message entities
//! - `rating` - Create pet rating entities
//! - `notification` - Create notification entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod application;
pub mod chat;
pub mod chat_participant;
pub mod helpers;
pub mod message;
pub mod notification;
pub mod pet;
pub mod rating;
pub mod rescue;
pub mod staff_member;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use application::create_application;
pub use chat::create_chat;
pub use chat_participant::create_chat_participant;
pub use helpers::{
    create_application_with_dependencies, create_chat_with_adopter, create_pet_with_rescue,
};
pub use message::create_message;
pub use notification::create_notification;
pub use pet::create_pet;
pub use rating::create_rating;
pub use rescue::create_rescue;
pub use staff_member::{create_coordinator, create_staff_member};
pub use user::{create_admin, create_user};
