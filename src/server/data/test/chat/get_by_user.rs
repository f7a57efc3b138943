use super::*;

/// Tests listing a user's chats with enrichment.
///
/// Expected: rescue name and participant list attached
#[tokio::test]
async fn lists_enriched_chats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, rescue, chat) = factory::create_chat_with_adopter(db).await?;

    let repo = ChatRepository::new(db);
    let chats = repo.get_by_user(adopter.id).await?;

    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, chat.id);
    assert_eq!(chats[0].rescue_name, rescue.name);
    assert_eq!(chats[0].participants.len(), 1);
    assert_eq!(chats[0].participants[0].user_id, adopter.id);

    Ok(())
}

/// Tests that chats the user is not in stay hidden.
///
/// Expected: empty list for a non-participant
#[tokio::test]
async fn hides_foreign_chats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_chat_with_adopter(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = ChatRepository::new(db);
    let chats = repo.get_by_user(stranger.id).await?;

    assert!(chats.is_empty());

    Ok(())
}
