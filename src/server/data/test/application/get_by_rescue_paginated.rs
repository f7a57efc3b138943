use super::*;

/// Tests that a rescue's inbox only contains applications for its own pets.
///
/// Expected: the other rescue's application absent
#[tokio::test]
async fn scopes_to_rescue_pets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let applicant = factory::create_user(db).await?;
    let rescue_a = factory::create_rescue(db).await?;
    let rescue_b = factory::create_rescue(db).await?;
    let pet_a = factory::create_pet(db, rescue_a.id).await?;
    let pet_b = factory::create_pet(db, rescue_b.id).await?;

    let ours = factory::create_application(db, pet_a.id, applicant.id).await?;
    factory::create_application(db, pet_b.id, applicant.id).await?;

    let repo = ApplicationRepository::new(db);
    let (applications, total) = repo
        .get_by_rescue_paginated(rescue_a.id, None, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(applications[0].id, ours.id);

    Ok(())
}

/// Tests status filtering in the rescue inbox.
///
/// Expected: only pending applications when filtered
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    let pet = factory::create_pet(db, rescue.id).await?;
    let other_pet = factory::create_pet(db, rescue.id).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let pending = factory::create_application(db, pet.id, first.id).await?;
    factory::application::ApplicationFactory::new(db, other_pet.id, second.id)
        .status("approved")
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let (applications, total) = repo
        .get_by_rescue_paginated(rescue.id, Some(ApplicationStatus::Pending), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(applications[0].id, pending.id);

    Ok(())
}

/// Tests a user's own application list.
///
/// Expected: only the user's applications, newest first
#[tokio::test]
async fn lists_applications_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mine = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let rescue = factory::create_rescue(db).await?;
    let pet_a = factory::create_pet(db, rescue.id).await?;
    let pet_b = factory::create_pet(db, rescue.id).await?;

    factory::create_application(db, pet_a.id, mine.id).await?;
    factory::create_application(db, pet_b.id, mine.id).await?;
    factory::create_application(db, pet_a.id, other.id).await?;

    let repo = ApplicationRepository::new(db);
    let (applications, total) = repo.get_by_user_paginated(mine.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(applications
        .iter()
        .all(|application| application.user_id == mine.id));

    Ok(())
}
