use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::token,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

const SECRET: &str = "test-secret";

/// Builds request headers carrying a bearer token for the given user.
fn bearer_headers(user_id: i32) -> HeaderMap {
    let token = token::issue_token(SECRET, user_id).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    headers
}

/// Tests that multiple permissions are all checked.
///
/// Verifies that when an endpoint requires several permissions, the caller
/// must satisfy every one of them.
///
/// Expected: Ok(User) when all permissions are met
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
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
    let result = guard
        .require(&[
            Permission::ViewStaff(rescue.id),
            Permission::ManagePets(rescue.id),
        ])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests that a single missing permission denies the whole request.
///
/// A plain staff member may manage pets but not the staff roster, so a
/// check combining both must fail.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
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
    let result = guard
        .require(&[
            Permission::ManagePets(rescue.id),
            Permission::ManageStaff(rescue.id),
        ])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, user.id);
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that an empty permission list only requires authentication.
///
/// Verifies that any authenticated account with a valid database record
/// passes when no permissions are listed.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;

    let headers = bearer_headers(user.id);
    let guard = AuthGuard::new(db, SECRET, &headers);
    let result = guard.require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}
