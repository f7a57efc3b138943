use super::*;

/// Tests paginating the full user list.
///
/// Creates five users and reads them back two per page.
///
/// Expected: pages of 2, 2, and 1 with total 5
#[tokio::test]
async fn paginates_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (page0, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(page0.len(), 2);

    let (page1, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(page1.len(), 2);

    let (page2, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(page2.len(), 1);

    Ok(())
}

/// Tests that users come back ordered by last name.
///
/// Expected: alphabetical order regardless of insertion order
#[tokio::test]
async fn orders_by_last_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .last_name("Zimmer")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .last_name("Abbott")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .last_name("Miller")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_all_paginated(0, 10).await?;

    let last_names: Vec<&str> = users.iter().map(|user| user.last_name.as_str()).collect();
    assert_eq!(last_names, vec!["Abbott", "Miller", "Zimmer"]);

    Ok(())
}

/// Tests pagination past the last page.
///
/// Expected: empty page with unchanged total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(3, 10).await?;

    assert_eq!(total, 1);
    assert!(users.is_empty());

    Ok(())
}
