use super::*;

/// Tests the cleanup used by the daily maintenance job.
///
/// Old read notifications go; unread ones and recent read ones stay.
///
/// Expected: exactly one row removed
#[tokio::test]
async fn removes_only_old_read_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .created_at(Utc::now() - Duration::days(45))
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(false)
        .created_at(Utc::now() - Duration::days(45))
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let removed = repo
        .delete_read_older_than(Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(removed, 1);
    let remaining = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(remaining, 2);

    Ok(())
}

/// Tests cleanup with nothing to remove.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let removed = repo
        .delete_read_older_than(Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
