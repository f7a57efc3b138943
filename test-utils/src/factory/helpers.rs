//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pet with its owning rescue.
///
/// Convenience method for tests that only need a pet and don't care about
/// the rescue's details.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((rescue, pet))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pet_with_rescue(
    db: &DatabaseConnection,
) -> Result<(entity::rescue::Model, entity::pet::Model), DbErr> {
    let rescue = crate::factory::rescue::create_rescue(db).await?;
    let pet = crate::factory::pet::create_pet(db, rescue.id).await?;

    Ok((rescue, pet))
}

/// Creates a complete adoption application with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as the applicant)
/// 2. Rescue
/// 3. Pet (owned by the rescue)
/// 4. Application (from the user for the pet)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, rescue, pet, application))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_application_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::rescue::Model,
        entity::pet::Model,
        entity::application::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let rescue = crate::factory::rescue::create_rescue(db).await?;
    let pet = crate::factory::pet::create_pet(db, rescue.id).await?;
    let application = crate::factory::application::create_application(db, pet.id, user.id).await?;

    Ok((user, rescue, pet, application))
}

/// Creates a chat between an adopter and a rescue, with the adopter as participant.
///
/// Creates the adopter user, the rescue, the chat, and a participant row for
/// the adopter. Useful when testing message posting and read receipts.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, rescue, chat))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_chat_with_adopter(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::rescue::Model,
        entity::chat::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let rescue = crate::factory::rescue::create_rescue(db).await?;
    let chat = crate::factory::chat::create_chat(db, rescue.id).await?;
    crate::factory::chat_participant::create_chat_participant(db, chat.id, user.id).await?;

    Ok((user, rescue, chat))
}
