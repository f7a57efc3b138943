use super::*;

/// Tests approving an application.
///
/// Expected: Ok(Some) with the new status
#[tokio::test]
async fn sets_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, application) = factory::create_application_with_dependencies(db).await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo
        .set_status(application.id, ApplicationStatus::Approved)
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().status, ApplicationStatus::Approved);

    Ok(())
}

/// Tests deciding an application that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let updated = repo.set_status(777, ApplicationStatus::Rejected).await?;

    assert!(updated.is_none());

    Ok(())
}
