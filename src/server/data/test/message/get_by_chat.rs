use super::*;

/// Tests reading a chat's messages in order.
///
/// Expected: chronological order with sender names attached
#[tokio::test]
async fn returns_messages_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, _, chat) = factory::create_chat_with_adopter(db).await?;

    let repo = MessageRepository::new(db);
    for text in ["first", "second", "third"] {
        repo.create(PostMessageParam {
            chat_id: chat.id,
            sender_id: adopter.id,
            body_source: text.to_string(),
            body_html: format!("<p>{}</p>", text),
        })
        .await?;
    }

    let messages = repo.get_by_chat(chat.id, None, 50).await?;

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].body_source, "first");
    assert_eq!(messages[2].body_source, "third");
    assert_eq!(
        messages[0].sender_name,
        format!("{} {}", adopter.first_name, adopter.last_name)
    );

    Ok(())
}

/// Tests incremental polling with after_id.
///
/// Expected: only messages newer than the cursor
#[tokio::test]
async fn returns_only_messages_after_cursor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, _, chat) = factory::create_chat_with_adopter(db).await?;

    let repo = MessageRepository::new(db);
    let mut ids = Vec::new();
    for text in ["one", "two", "three"] {
        let message = repo
            .create(PostMessageParam {
                chat_id: chat.id,
                sender_id: adopter.id,
                body_source: text.to_string(),
                body_html: format!("<p>{}</p>", text),
            })
            .await?;
        ids.push(message.id);
    }

    let newer = repo.get_by_chat(chat.id, Some(ids[0]), 50).await?;

    assert_eq!(newer.len(), 2);
    assert_eq!(newer[0].body_source, "two");
    assert_eq!(newer[1].body_source, "three");

    Ok(())
}

/// Tests that messages from other chats never leak in.
///
/// Expected: only the requested chat's messages
#[tokio::test]
async fn scopes_to_chat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (adopter, rescue, chat) = factory::create_chat_with_adopter(db).await?;
    let other_chat = factory::create_chat(db, rescue.id).await?;
    factory::create_message(db, other_chat.id, adopter.id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_chat(chat.id, None, 50).await?;

    assert!(messages.is_empty());

    Ok(())
}
