use super::*;

/// Tests recording a first rating.
///
/// Expected: Ok with a new rating row
#[tokio::test]
async fn inserts_new_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, pet) = factory::create_pet_with_rescue(db).await?;

    let repo = RatingRepository::new(db);
    let rating = repo
        .upsert(RatePetParam {
            user_id: user.id,
            pet_id: pet.id,
            liked: true,
        })
        .await?;

    assert!(rating.liked);
    assert_eq!(rating.user_id, user.id);
    assert_eq!(rating.pet_id, pet.id);

    Ok(())
}

/// Tests re-rating a pet.
///
/// A second verdict for the same (user, pet) pair must replace the first
/// rather than add a row.
///
/// Expected: one row, liked flipped to false
#[tokio::test]
async fn rerating_replaces_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, pet) = factory::create_pet_with_rescue(db).await?;

    let repo = RatingRepository::new(db);
    repo.upsert(RatePetParam {
        user_id: user.id,
        pet_id: pet.id,
        liked: true,
    })
    .await?;
    let second = repo
        .upsert(RatePetParam {
            user_id: user.id,
            pet_id: pet.id,
            liked: false,
        })
        .await?;

    assert!(!second.liked);

    let count = entity::prelude::Rating::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that likes by user only include liked verdicts.
///
/// Expected: passed pets absent from the likes list
#[tokio::test]
async fn likes_exclude_passes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let rescue = factory::create_rescue(db).await?;
    let liked_pet = factory::create_pet(db, rescue.id).await?;
    let passed_pet = factory::create_pet(db, rescue.id).await?;

    factory::rating::RatingFactory::new(db, user.id, liked_pet.id)
        .liked(true)
        .build()
        .await?;
    factory::rating::RatingFactory::new(db, user.id, passed_pet.id)
        .liked(false)
        .build()
        .await?;

    let repo = RatingRepository::new(db);
    let likes = repo.get_likes_by_user(user.id).await?;

    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].pet_id, liked_pet.id);

    Ok(())
}
