use super::*;

/// Tests updating a pet listing.
///
/// Expected: Ok(Some) with all fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    let pet = factory::create_pet(db, rescue.id).await?;

    let repo = PetRepository::new(db);
    let updated = repo
        .update(UpdatePetParam {
            id: pet.id,
            name: "Biscuit".to_string(),
            species: Species::Cat,
            breed: Some("Tabby".to_string()),
            age_months: 18,
            status: PetStatus::Pending,
            description_source: "Loves naps".to_string(),
            description_html: "<p>Loves naps</p>".to_string(),
            photo_url: Some("https://example.com/biscuit.jpg".to_string()),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Biscuit");
    assert_eq!(updated.species, Species::Cat);
    assert_eq!(updated.status, PetStatus::Pending);
    assert_eq!(updated.age_months, 18);

    Ok(())
}

/// Tests updating a pet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let updated = repo
        .update(UpdatePetParam {
            id: 424242,
            name: "Ghost".to_string(),
            species: Species::Dog,
            breed: None,
            age_months: 12,
            status: PetStatus::Available,
            description_source: String::new(),
            description_html: String::new(),
            photo_url: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests the status-only update used when an application is decided.
///
/// Expected: status changes without touching other fields
#[tokio::test]
async fn set_status_changes_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rescue = factory::create_rescue(db).await?;
    let pet = factory::create_pet(db, rescue.id).await?;

    let repo = PetRepository::new(db);
    repo.set_status(pet.id, PetStatus::Adopted).await?;

    let found = repo.find_by_id(pet.id).await?.unwrap();
    assert_eq!(found.status, PetStatus::Adopted);
    assert_eq!(found.name, pet.name);

    Ok(())
}
