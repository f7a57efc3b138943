use super::*;

/// Tests the unread-only filter.
///
/// Expected: read notifications excluded when the flag is set
#[tokio::test]
async fn filters_unread_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let unread = factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo
        .get_paginated(GetNotificationsParam {
            user_id: user.id,
            unread_only: true,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(notifications[0].id, unread.id);

    Ok(())
}

/// Tests that notifications stay private to their user.
///
/// Expected: another user's notifications absent
#[tokio::test]
async fn scopes_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mine = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, mine.id).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo
        .get_paginated(GetNotificationsParam {
            user_id: mine.id,
            unread_only: false,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(notifications[0].user_id, mine.id);

    Ok(())
}

/// Tests marking a notification read.
///
/// Expected: read flag set afterwards
#[tokio::test]
async fn mark_read_sets_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_read(notification.id).await?;

    let found = repo.find_by_id(notification.id).await?.unwrap();
    assert!(found.read);

    Ok(())
}

/// Tests the staff fan-out insert.
///
/// Expected: one notification per user with the shared kind and body
#[tokio::test]
async fn creates_for_many_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create_for_users(
        &[first.id, second.id],
        "application.submitted",
        "New application received",
    )
    .await?;

    let count = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests single-notification creation defaults.
///
/// Expected: unread on creation
#[tokio::test]
async fn creates_unread_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParam {
            user_id: user.id,
            kind: "application.approved".to_string(),
            body: "Your application was approved".to_string(),
        })
        .await?;

    assert!(!notification.read);
    assert_eq!(notification.kind, "application.approved");

    Ok(())
}
