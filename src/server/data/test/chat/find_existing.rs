use super::*;

/// Tests reusing an existing chat between a creator and a rescue.
///
/// Expected: Ok(Some) with the chat the creator already participates in
#[tokio::test]
async fn finds_chat_creator_participates_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, rescue, chat) = factory::create_chat_with_adopter(db).await?;

    let repo = ChatRepository::new(db);
    let found = repo
        .find_existing(&OpenChatParam {
            creator_id: adopter.id,
            rescue_id: rescue.id,
            application_id: None,
        })
        .await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, chat.id);

    Ok(())
}

/// Tests that another user's chat with the rescue is not reused.
///
/// Expected: Ok(None) for a user with no participant row
#[tokio::test]
async fn ignores_chats_of_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, rescue, _) = factory::create_chat_with_adopter(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = ChatRepository::new(db);
    let found = repo
        .find_existing(&OpenChatParam {
            creator_id: stranger.id,
            rescue_id: rescue.id,
            application_id: None,
        })
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that chats about different applications stay separate.
///
/// A general chat with the rescue must not satisfy a lookup scoped to an
/// application.
///
/// Expected: Ok(None) when application IDs differ
#[tokio::test]
async fn distinguishes_application_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, rescue, _) = factory::create_chat_with_adopter(db).await?;
    let pet = factory::create_pet(db, rescue.id).await?;
    let application = factory::create_application(db, pet.id, adopter.id).await?;

    let repo = ChatRepository::new(db);
    let found = repo
        .find_existing(&OpenChatParam {
            creator_id: adopter.id,
            rescue_id: rescue.id,
            application_id: Some(application.id),
        })
        .await?;

    assert!(found.is_none());

    Ok(())
}
