use super::*;

/// Tests selecting stale pending applications for the reminder job.
///
/// Creates an old pending application, a fresh one, and an old one that
/// was already reminded.
///
/// Expected: only the old unreminded application
#[tokio::test]
async fn selects_only_stale_unreminded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    let pet_a = factory::create_pet(db, rescue.id).await?;
    let pet_b = factory::create_pet(db, rescue.id).await?;
    let pet_c = factory::create_pet(db, rescue.id).await?;
    let user = factory::create_user(db).await?;

    let old = factory::application::ApplicationFactory::new(db, pet_a.id, user.id)
        .created_at(Utc::now() - Duration::hours(100))
        .build()
        .await?;
    factory::create_application(db, pet_b.id, user.id).await?;
    factory::application::ApplicationFactory::new(db, pet_c.id, user.id)
        .created_at(Utc::now() - Duration::hours(100))
        .reminded_at(Utc::now() - Duration::hours(20))
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let cutoff = Utc::now() - Duration::hours(72);
    let stale = repo.get_pending_unreminded_before(cutoff).await?;

    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].id, old.id);

    Ok(())
}

/// Tests that decided applications never trigger reminders.
///
/// Expected: old approved application excluded
#[tokio::test]
async fn ignores_decided_applications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    let pet = factory::create_pet(db, rescue.id).await?;
    let user = factory::create_user(db).await?;

    factory::application::ApplicationFactory::new(db, pet.id, user.id)
        .status("approved")
        .created_at(Utc::now() - Duration::hours(100))
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let cutoff = Utc::now() - Duration::hours(72);
    let stale = repo.get_pending_unreminded_before(cutoff).await?;

    assert!(stale.is_empty());

    Ok(())
}

/// Tests marking an application as reminded.
///
/// Expected: application drops out of the stale set afterwards
#[tokio::test]
async fn set_reminded_prevents_reselection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    let pet = factory::create_pet(db, rescue.id).await?;
    let user = factory::create_user(db).await?;

    let application = factory::application::ApplicationFactory::new(db, pet.id, user.id)
        .created_at(Utc::now() - Duration::hours(100))
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let cutoff = Utc::now() - Duration::hours(72);
    assert_eq!(repo.get_pending_unreminded_before(cutoff).await?.len(), 1);

    repo.set_reminded(application.id, Utc::now()).await?;

    assert!(repo.get_pending_unreminded_before(cutoff).await?.is_empty());

    Ok(())
}
