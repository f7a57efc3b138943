use super::*;

/// Tests recording a read marker.
///
/// Expected: last_read_at set after marking
#[tokio::test]
async fn sets_last_read_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, _, chat) = factory::create_chat_with_adopter(db).await?;

    let repo = ChatParticipantRepository::new(db);
    repo.mark_read(chat.id, adopter.id).await?;

    let row = entity::prelude::ChatParticipant::find()
        .one(db)
        .await?
        .unwrap();
    assert!(row.last_read_at.is_some());

    Ok(())
}

/// Tests that marking read only touches the caller's row.
///
/// Expected: other participant's marker untouched
#[tokio::test]
async fn leaves_other_participants_alone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, _, chat) = factory::create_chat_with_adopter(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_chat_participant(db, chat.id, other.id).await?;

    let repo = ChatParticipantRepository::new(db);
    repo.mark_read(chat.id, adopter.id).await?;

    let rows = entity::prelude::ChatParticipant::find().all(db).await?;
    for row in rows {
        if row.user_id == adopter.id {
            assert!(row.last_read_at.is_some());
        } else {
            assert!(row.last_read_at.is_none());
        }
    }

    Ok(())
}
