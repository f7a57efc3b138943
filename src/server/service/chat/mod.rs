//! Chat between adopters and rescue staff.
//!
//! Access to a chat is either a participant row or staff standing at the
//! owning rescue. Staff get their participant row lazily the first time they
//! act in a chat for their rescue, so the roster can change without
//! backfilling rows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        application::ApplicationRepository, chat::ChatRepository,
        chat_participant::ChatParticipantRepository, message::MessageRepository,
        pet::PetRepository, rescue::RescueRepository, staff_member::StaffMemberRepository,
    },
    error::AppError,
    model::chat::{Chat, Message, OpenChatParam, PostMessageParam},
    service::{chat::typing::TypingService, sanitizer},
};

pub mod typing;

/// Maximum messages returned per poll.
const MESSAGE_PAGE_LIMIT: u64 = 100;

/// Service providing business logic for chats, messages, and typing state.
pub struct ChatService<'a> {
    pub db: &'a DatabaseConnection,
    typing: &'a TypingService,
}

impl<'a> ChatService<'a> {
    /// Creates a new ChatService instance.
    pub fn new(db: &'a DatabaseConnection, typing: &'a TypingService) -> Self {
        Self { db, typing }
    }

    /// Opens a chat with a rescue, reusing an existing one when the creator
    /// already has a chat with the same rescue and application scope.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The opened or reused chat, enriched
    /// - `Err(AppError::NotFound)` - Rescue or referenced application missing
    /// - `Err(AppError::BadRequest)` - Application does not belong to the
    ///   creator or is about another rescue's pet
    pub async fn open(&self, param: OpenChatParam) -> Result<Chat, AppError> {
        RescueRepository::new(self.db)
            .find_by_id(param.rescue_id)
            .await?
            .ok_or(AppError::NotFound("rescue".to_string()))?;

        if let Some(application_id) = param.application_id {
            let application = ApplicationRepository::new(self.db)
                .find_by_id(application_id)
                .await?
                .ok_or(AppError::NotFound("application".to_string()))?;

            if application.user_id != param.creator_id {
                return Err(AppError::BadRequest(
                    "application belongs to another user".to_string(),
                ));
            }

            let pet = PetRepository::new(self.db)
                .find_by_id(application.pet_id)
                .await?
                .ok_or(AppError::NotFound("pet".to_string()))?;
            if pet.rescue_id != param.rescue_id {
                return Err(AppError::BadRequest(
                    "application is about another rescue's pet".to_string(),
                ));
            }
        }

        let chat_repo = ChatRepository::new(self.db);
        let chat = match chat_repo.find_existing(&param).await? {
            Some(chat) => chat,
            None => chat_repo.create(&param).await?,
        };

        ChatParticipantRepository::new(self.db)
            .ensure(chat.id, param.creator_id)
            .await?;

        chat_repo
            .find_enriched(chat.id)
            .await?
            .ok_or(AppError::NotFound("chat".to_string()))
    }

    /// Lists the chats the user participates in.
    pub async fn get_chats(&self, user_id: i32) -> Result<Vec<Chat>, AppError> {
        ChatRepository::new(self.db).get_by_user(user_id).await
    }

    /// Lists every chat at a rescue, for its staff.
    ///
    /// Access is checked at the controller; this includes chats the caller
    /// has not joined yet.
    pub async fn get_chats_for_rescue(&self, rescue_id: i32) -> Result<Vec<Chat>, AppError> {
        ChatRepository::new(self.db).get_by_rescue(rescue_id).await
    }

    /// Retrieves a single chat the user may access.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The enriched chat
    /// - `Err(AppError::NotFound)` - Chat missing or not accessible
    pub async fn get_chat(&self, chat_id: i32, user_id: i32) -> Result<Chat, AppError> {
        self.authorize(chat_id, user_id).await?;

        ChatRepository::new(self.db)
            .find_enriched(chat_id)
            .await?
            .ok_or(AppError::NotFound("chat".to_string()))
    }

    /// Posts a message to a chat.
    ///
    /// The body is stored as markdown source plus its sanitized rendering,
    /// and the chat's updated timestamp is bumped.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(AppError::BadRequest)` - Empty body
    /// - `Err(AppError::NotFound)` - Chat missing or not accessible
    pub async fn post_message(
        &self,
        chat_id: i32,
        user_id: i32,
        body: &str,
    ) -> Result<Message, AppError> {
        if body.trim().is_empty() {
            return Err(AppError::BadRequest("message must not be empty".to_string()));
        }

        self.authorize(chat_id, user_id).await?;

        let message = MessageRepository::new(self.db)
            .create(PostMessageParam {
                chat_id,
                sender_id: user_id,
                body_source: body.to_string(),
                body_html: sanitizer::render_markdown(body),
            })
            .await?;

        ChatRepository::new(self.db).touch(chat_id).await?;

        Ok(message)
    }

    /// Reads a chat's messages, optionally only those newer than a cursor.
    pub async fn get_messages(
        &self,
        chat_id: i32,
        user_id: i32,
        after_id: Option<i32>,
    ) -> Result<Vec<Message>, AppError> {
        self.authorize(chat_id, user_id).await?;

        MessageRepository::new(self.db)
            .get_by_chat(chat_id, after_id, MESSAGE_PAGE_LIMIT)
            .await
    }

    /// Records that the user has read the chat up to now.
    pub async fn mark_read(&self, chat_id: i32, user_id: i32) -> Result<(), AppError> {
        self.authorize(chat_id, user_id).await?;

        ChatParticipantRepository::new(self.db)
            .mark_read(chat_id, user_id)
            .await
    }

    /// Signals that the user is typing in the chat.
    pub async fn set_typing(&self, chat_id: i32, user_id: i32) -> Result<(), AppError> {
        self.authorize(chat_id, user_id).await?;
        self.typing.set_typing(chat_id, user_id).await;
        Ok(())
    }

    /// Lists the other users currently typing in the chat.
    pub async fn typing_users(&self, chat_id: i32, user_id: i32) -> Result<Vec<i32>, AppError> {
        self.authorize(chat_id, user_id).await?;

        let mut user_ids = self.typing.typing_users(chat_id).await;
        user_ids.retain(|id| *id != user_id);
        Ok(user_ids)
    }

    /// Checks chat access, lazily joining staff of the owning rescue.
    ///
    /// A chat's existence is not revealed to users without access; they get
    /// the same not-found error as for a missing chat.
    async fn authorize(&self, chat_id: i32, user_id: i32) -> Result<(), AppError> {
        let chat = ChatRepository::new(self.db)
            .find_by_id(chat_id)
            .await?
            .ok_or(AppError::NotFound("chat".to_string()))?;

        let participant_repo = ChatParticipantRepository::new(self.db);
        if participant_repo.is_participant(chat_id, user_id).await? {
            return Ok(());
        }

        let membership = StaffMemberRepository::new(self.db)
            .find_membership(chat.rescue_id, user_id)
            .await?;
        if membership.is_some() {
            participant_repo.ensure(chat_id, user_id).await?;
            return Ok(());
        }

        Err(AppError::NotFound("chat".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn open_is_idempotent() -> Result<(), AppError> {
        let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let typing = TypingService::new();

        let adopter = factory::create_user(db).await?;
        let rescue = factory::create_rescue(db).await?;

        let service = ChatService::new(db, &typing);
        let first = service
            .open(OpenChatParam {
                creator_id: adopter.id,
                rescue_id: rescue.id,
                application_id: None,
            })
            .await?;
        let second = service
            .open(OpenChatParam {
                creator_id: adopter.id,
                rescue_id: rescue.id,
                application_id: None,
            })
            .await?;

        assert_eq!(first.id, second.id);
        let chat_count = entity::prelude::Chat::find().count(db).await?;
        assert_eq!(chat_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn open_rejects_foreign_application() -> Result<(), AppError> {
        let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let typing = TypingService::new();

        let adopter = factory::create_user(db).await?;
        let stranger = factory::create_user(db).await?;
        let (rescue, pet) = factory::create_pet_with_rescue(db).await?;
        let application = factory::create_application(db, pet.id, adopter.id).await?;

        let service = ChatService::new(db, &typing);
        let result = service
            .open(OpenChatParam {
                creator_id: stranger.id,
                rescue_id: rescue.id,
                application_id: Some(application.id),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn staff_join_lazily_on_first_message() -> Result<(), AppError> {
        let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let typing = TypingService::new();

        let (_, rescue, chat) = factory::create_chat_with_adopter(db).await?;
        let staff_user = factory::create_user(db).await?;
        factory::create_staff_member(db, rescue.id, staff_user.id).await?;

        let service = ChatService::new(db, &typing);
        service
            .post_message(chat.id, staff_user.id, "Hello from the rescue")
            .await?;

        let participants = entity::prelude::ChatParticipant::find().count(db).await?;
        assert_eq!(participants, 2);

        Ok(())
    }

    #[tokio::test]
    async fn outsiders_see_chats_as_missing() -> Result<(), AppError> {
        let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let typing = TypingService::new();

        let (_, _, chat) = factory::create_chat_with_adopter(db).await?;
        let stranger = factory::create_user(db).await?;

        let service = ChatService::new(db, &typing);
        let result = service.get_chat(chat.id, stranger.id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn message_bodies_are_sanitized() -> Result<(), AppError> {
        let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let typing = TypingService::new();

        let (adopter, _, chat) = factory::create_chat_with_adopter(db).await?;

        let service = ChatService::new(db, &typing);
        let message = service
            .post_message(chat.id, adopter.id, "hi <script>alert(1)</script> there")
            .await?;

        assert!(!message.body_html.contains("<script>"));
        assert!(message.body_source.contains("<script>"));

        Ok(())
    }

    #[tokio::test]
    async fn empty_messages_are_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let typing = TypingService::new();

        let (adopter, _, chat) = factory::create_chat_with_adopter(db).await?;

        let service = ChatService::new(db, &typing);
        let result = service.post_message(chat.id, adopter.id, "   ").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn typing_excludes_the_caller() -> Result<(), AppError> {
        let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let typing = TypingService::new();

        let (adopter, rescue, chat) = factory::create_chat_with_adopter(db).await?;
        let staff_user = factory::create_user(db).await?;
        factory::create_staff_member(db, rescue.id, staff_user.id).await?;

        let service = ChatService::new(db, &typing);
        service.set_typing(chat.id, adopter.id).await?;
        service.set_typing(chat.id, staff_user.id).await?;

        let seen_by_adopter = service.typing_users(chat.id, adopter.id).await?;
        assert_eq!(seen_by_adopter, vec![staff_user.id]);

        Ok(())
    }
}
