use super::*;

/// Tests adding a participant to a chat.
///
/// Expected: participant row created
#[tokio::test]
async fn adds_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, rescue, chat) = factory::create_chat_with_adopter(db).await?;
    let staff_user = factory::create_user(db).await?;
    factory::create_staff_member(db, rescue.id, staff_user.id).await?;

    let repo = ChatParticipantRepository::new(db);
    repo.ensure(chat.id, staff_user.id).await?;

    assert!(repo.is_participant(chat.id, staff_user.id).await?);

    Ok(())
}

/// Tests that ensuring twice leaves a single row.
///
/// Expected: one participant row for the (chat, user) pair
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, _, chat) = factory::create_chat_with_adopter(db).await?;

    let repo = ChatParticipantRepository::new(db);
    repo.ensure(chat.id, adopter.id).await?;
    repo.ensure(chat.id, adopter.id).await?;

    let count = entity::prelude::ChatParticipant::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
