use super::*;

/// Tests filtering pets by species.
///
/// Expected: only dogs returned
#[tokio::test]
async fn filters_by_species() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    factory::pet::PetFactory::new(db, rescue.id).species("dog").build().await?;
    factory::pet::PetFactory::new(db, rescue.id).species("dog").build().await?;
    factory::pet::PetFactory::new(db, rescue.id).species("cat").build().await?;

    let repo = PetRepository::new(db);
    let (pets, total) = repo
        .get_filtered_paginated(PetFilterParam {
            species: Some(Species::Dog),
            status: None,
            rescue_id: None,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 2);
    assert!(pets.iter().all(|pet| pet.species == Species::Dog));

    Ok(())
}

/// Tests filtering pets by status and rescue together.
///
/// Expected: only the matching rescue's available pets
#[tokio::test]
async fn combines_status_and_rescue_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue_a = factory::create_rescue(db).await?;
    let rescue_b = factory::create_rescue(db).await?;
    let wanted = factory::pet::PetFactory::new(db, rescue_a.id)
        .status("available")
        .build()
        .await?;
    factory::pet::PetFactory::new(db, rescue_a.id)
        .status("adopted")
        .build()
        .await?;
    factory::pet::PetFactory::new(db, rescue_b.id)
        .status("available")
        .build()
        .await?;

    let repo = PetRepository::new(db);
    let (pets, total) = repo
        .get_filtered_paginated(PetFilterParam {
            species: None,
            status: Some(PetStatus::Available),
            rescue_id: Some(rescue_a.id),
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(pets[0].id, wanted.id);

    Ok(())
}

/// Tests unfiltered pagination.
///
/// Expected: total reflects all pets, pages sized per_page
#[tokio::test]
async fn paginates_without_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    for _ in 0..4 {
        factory::create_pet(db, rescue.id).await?;
    }

    let repo = PetRepository::new(db);
    let (pets, total) = repo
        .get_filtered_paginated(PetFilterParam {
            species: None,
            status: None,
            rescue_id: None,
            page: 1,
            per_page: 3,
        })
        .await?;

    assert_eq!(total, 4);
    assert_eq!(pets.len(), 1);

    Ok(())
}
