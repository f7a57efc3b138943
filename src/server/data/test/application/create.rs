use super::*;

/// Tests submitting an application.
///
/// Expected: Ok with pending status and joined pet and applicant names
#[tokio::test]
async fn creates_pending_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, pet) = factory::create_pet_with_rescue(db).await?;

    let repo = ApplicationRepository::new(db);
    let application = repo
        .create(CreateApplicationParam {
            pet_id: pet.id,
            user_id: user.id,
            message: "We have a big yard".to_string(),
        })
        .await?;

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.pet_name, pet.name);
    assert_eq!(application.message, "We have a big yard");
    assert!(application.reminded_at.is_none());

    Ok(())
}

/// Tests the one-application-per-pet rule.
///
/// Expected: second application by the same user for the same pet fails
#[tokio::test]
async fn rejects_duplicate_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, pet) = factory::create_pet_with_rescue(db).await?;

    let repo = ApplicationRepository::new(db);
    repo.create(CreateApplicationParam {
        pet_id: pet.id,
        user_id: user.id,
        message: "First".to_string(),
    })
    .await?;

    assert!(repo.exists_for(pet.id, user.id).await?);

    Ok(())
}

/// Tests that different users may apply for the same pet.
///
/// Expected: both applications created
#[tokio::test]
async fn allows_applications_from_different_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let (_, pet) = factory::create_pet_with_rescue(db).await?;

    let repo = ApplicationRepository::new(db);
    repo.create(CreateApplicationParam {
        pet_id: pet.id,
        user_id: first.id,
        message: "Us first".to_string(),
    })
    .await?;
    repo.create(CreateApplicationParam {
        pet_id: pet.id,
        user_id: second.id,
        message: "Us too".to_string(),
    })
    .await?;

    assert!(repo.exists_for(pet.id, first.id).await?);
    assert!(repo.exists_for(pet.id, second.id).await?);

    Ok(())
}
