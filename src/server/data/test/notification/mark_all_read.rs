use super::*;

/// Tests marking a whole inbox read at once.
///
/// Expected: all of the user's unread notifications flipped, count returned
#[tokio::test]
async fn marks_every_unread_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_all_read(user.id).await?;
    assert_eq!(updated, 2);

    let (unread, _) = repo
        .get_paginated(GetNotificationsParam {
            user_id: user.id,
            unread_only: true,
            page: 0,
            per_page: 10,
        })
        .await?;
    assert!(unread.is_empty());

    Ok(())
}

/// Tests that marking all read leaves other inboxes alone.
///
/// Expected: the other user's notification stays unread
#[tokio::test]
async fn leaves_other_users_unread() -> Result<(), AppError> {
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
    repo.mark_all_read(mine.id).await?;

    let (unread, _) = repo
        .get_paginated(GetNotificationsParam {
            user_id: other.id,
            unread_only: true,
            page: 0,
            per_page: 10,
        })
        .await?;
    assert_eq!(unread.len(), 1);

    Ok(())
}
