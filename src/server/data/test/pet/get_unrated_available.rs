use super::*;

/// Tests that the discovery feed skips pets the user has rated.
///
/// Rates one pet (liked) and one pet (passed); both must disappear from
/// the feed while the third remains.
///
/// Expected: only the unrated pet
#[tokio::test]
async fn excludes_rated_pets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let rescue = factory::create_rescue(db).await?;
    let liked = factory::create_pet(db, rescue.id).await?;
    let passed = factory::create_pet(db, rescue.id).await?;
    let fresh = factory::create_pet(db, rescue.id).await?;

    factory::rating::RatingFactory::new(db, user.id, liked.id)
        .liked(true)
        .build()
        .await?;
    factory::rating::RatingFactory::new(db, user.id, passed.id)
        .liked(false)
        .build()
        .await?;

    let repo = PetRepository::new(db);
    let pets = repo.get_unrated_available(user.id, 10).await?;

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, fresh.id);

    Ok(())
}

/// Tests that the feed only contains available pets.
///
/// Expected: pending and adopted pets excluded
#[tokio::test]
async fn excludes_unavailable_pets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let rescue = factory::create_rescue(db).await?;
    let available = factory::pet::PetFactory::new(db, rescue.id)
        .status("available")
        .build()
        .await?;
    factory::pet::PetFactory::new(db, rescue.id)
        .status("pending")
        .build()
        .await?;
    factory::pet::PetFactory::new(db, rescue.id)
        .status("adopted")
        .build()
        .await?;

    let repo = PetRepository::new(db);
    let pets = repo.get_unrated_available(user.id, 10).await?;

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, available.id);

    Ok(())
}

/// Tests that ratings by other users do not hide pets.
///
/// Expected: pet rated by someone else still appears
#[tokio::test]
async fn ignores_ratings_by_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let browsing = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let rescue = factory::create_rescue(db).await?;
    let pet = factory::create_pet(db, rescue.id).await?;

    factory::create_rating(db, other.id, pet.id).await?;

    let repo = PetRepository::new(db);
    let pets = repo.get_unrated_available(browsing.id, 10).await?;

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, pet.id);

    Ok(())
}

/// Tests the feed limit.
///
/// Expected: at most `limit` pets returned
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let rescue = factory::create_rescue(db).await?;
    for _ in 0..5 {
        factory::create_pet(db, rescue.id).await?;
    }

    let repo = PetRepository::new(db);
    let pets = repo.get_unrated_available(user.id, 3).await?;

    assert_eq!(pets.len(), 3);

    Ok(())
}
