use super::*;

/// Tests that a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let guard = AuthGuard::new(db, SECRET, &headers);
    let result = guard.require(&[]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::MissingToken) => {}
        e => panic!("Expected MissingToken error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a garbage bearer token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        "Bearer not-a-real-token".parse().unwrap(),
    );

    let guard = AuthGuard::new(db, SECRET, &headers);
    let result = guard.require(&[]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidToken) => {}
        e => panic!("Expected InvalidToken error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a token signed with a different secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_wrong_secret() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;

    let token = token::issue_token("some-other-secret", user.id)?;
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let guard = AuthGuard::new(db, SECRET, &headers);
    let result = guard.require(&[]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidToken) => {}
        e => panic!("Expected InvalidToken error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a valid token for a deleted account is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer_headers(4242);
    let guard = AuthGuard::new(db, SECRET, &headers);
    let result = guard.require(&[]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(id)) => assert_eq!(id, 4242),
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that an adopter cannot manage a rescue's pets.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_adopter_pet_management() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let rescue = factory::rescue::create_rescue(db).await?;

    let headers = bearer_headers(user.id);
    let guard = AuthGuard::new(db, SECRET, &headers);
    let result = guard.require(&[Permission::ManagePets(rescue.id)]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, user.id);
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a staff member can manage pets but not the roster.
///
/// Expected: Ok for ManagePets, Err(AccessDenied) for ManageStaff
#[tokio::test]
async fn staff_manages_pets_but_not_roster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let rescue = factory::rescue::create_rescue(db).await?;
    factory::staff_member::create_staff_member(db, rescue.id, user.id).await?;

    let headers = bearer_headers(user.id);
    let guard = AuthGuard::new(db, SECRET, &headers);

    let allowed = guard.require(&[Permission::ManagePets(rescue.id)]).await;
    assert!(allowed.is_ok());

    let denied = guard.require(&[Permission::ManageStaff(rescue.id)]).await;
    assert!(denied.is_err());

    Ok(())
}

/// Tests that a coordinator can manage the staff roster and the rescue.
///
/// Expected: Ok(User) for both permissions
#[tokio::test]
async fn coordinator_manages_staff_and_rescue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let rescue = factory::rescue::create_rescue(db).await?;
    factory::staff_member::create_coordinator(db, rescue.id, user.id).await?;

    let headers = bearer_headers(user.id);
    let guard = AuthGuard::new(db, SECRET, &headers);

    let result = guard
        .require(&[
            Permission::ManageStaff(rescue.id),
            Permission::ManageRescue(rescue.id),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that staff roles do not carry over to other rescues.
///
/// A coordinator at one rescue is a plain adopter everywhere else.
///
/// Expected: Err(AuthError::AccessDenied) for the other rescue
#[tokio::test]
async fn role_is_scoped_to_its_rescue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let home_rescue = factory::rescue::create_rescue(db).await?;
    let other_rescue = factory::rescue::create_rescue(db).await?;
    factory::staff_member::create_coordinator(db, home_rescue.id, user.id).await?;

    let headers = bearer_headers(user.id);
    let guard = AuthGuard::new(db, SECRET, &headers);

    let home = guard
        .require(&[Permission::ManagePets(home_rescue.id)])
        .await;
    assert!(home.is_ok());

    let away = guard
        .require(&[Permission::ManagePets(other_rescue.id)])
        .await;
    match away.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, user.id);
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that an admin passes every permission check.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn admin_passes_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let rescue = factory::rescue::create_rescue(db).await?;

    let headers = bearer_headers(admin.id);
    let guard = AuthGuard::new(db, SECRET, &headers);

    let result = guard
        .require(&[
            Permission::Admin,
            Permission::ManageUsers,
            Permission::ViewAuditLogs,
            Permission::ManageRescue(rescue.id),
        ])
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().admin);

    Ok(())
}

/// Tests that a non-admin is denied admin-only permissions.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_admin_user_management() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;

    let headers = bearer_headers(user.id);
    let guard = AuthGuard::new(db, SECRET, &headers);
    let result = guard.require(&[Permission::ManageUsers]).await;

    assert!(result.is_err());

    Ok(())
}
