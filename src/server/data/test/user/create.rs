use super::*;

/// Tests creating a user from registration parameters.
///
/// Verifies that the repository inserts the user with the given fields,
/// no admin privileges, and timestamps set.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user_with_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "jane@example.com".to_string(),
            password_hash: "hashed".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        })
        .await?;

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.last_name, "Doe");
    assert!(!user.admin);

    // Verify the row exists in the database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Verifies that creating a second user with an already registered email
/// fails with a database error.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParam {
        email: "taken@example.com".to_string(),
        password_hash: "hashed".to_string(),
        first_name: "First".to_string(),
        last_name: "User".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParam {
            email: "taken@example.com".to_string(),
            password_hash: "other".to_string(),
            first_name: "Second".to_string(),
            last_name: "User".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests updating a user's profile fields.
///
/// Verifies that first and last name change while email stays untouched.
///
/// Expected: Ok(Some) with updated names
#[tokio::test]
async fn update_changes_names_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParam {
            id: user.id,
            first_name: "Renamed".to_string(),
            last_name: "Person".to_string(),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.last_name, "Person");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParam {
            id: 9999,
            first_name: "Nobody".to_string(),
            last_name: "Here".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
