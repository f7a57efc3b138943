//! Chat and message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::chat::{ChatDto, ChatParticipantDto, MessageDto};

/// Conversation between an adopter and a rescue's staff.
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i32,
    pub rescue_id: i32,
    pub rescue_name: String,
    /// Set when the chat was opened for a specific application.
    pub application_id: Option<i32>,
    pub participants: Vec<ChatParticipant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    /// Builds the domain model from a chat row, its rescue name, and its
    /// participant rows joined with their users.
    pub fn from_entities(
        entity: entity::chat::Model,
        rescue_name: String,
        participants: Vec<ChatParticipant>,
    ) -> Self {
        Self {
            id: entity.id,
            rescue_id: entity.rescue_id,
            rescue_name,
            application_id: entity.application_id,
            participants,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the chat domain model to a DTO for API responses.
    pub fn into_dto(self) -> ChatDto {
        ChatDto {
            id: self.id,
            rescue_id: self.rescue_id,
            rescue_name: self.rescue_name,
            application_id: self.application_id,
            participants: self
                .participants
                .into_iter()
                .map(|p| p.into_dto())
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Chat membership with read-receipt state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatParticipant {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// When the participant last marked the chat read; `None` if never.
    pub last_read_at: Option<DateTime<Utc>>,
}

impl ChatParticipant {
    /// Builds the domain model from a participant row and its joined user row.
    pub fn from_entities(
        entity: entity::chat_participant::Model,
        user: entity::user::Model,
    ) -> Self {
        Self {
            user_id: entity.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            last_read_at: entity.last_read_at,
        }
    }

    /// Converts the participant domain model to a DTO for API responses.
    pub fn into_dto(self) -> ChatParticipantDto {
        ChatParticipantDto {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            last_read_at: self.last_read_at,
        }
    }
}

/// Chat message, enriched with the sender's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub chat_id: i32,
    pub sender_id: i32,
    pub sender_name: String,
    /// Markdown as submitted by the sender.
    pub body_source: String,
    /// Sanitized rendering of `body_source`.
    pub body_html: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds the domain model from a message row and its joined sender row.
    pub fn from_entities(entity: entity::message::Model, sender: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            chat_id: entity.chat_id,
            sender_id: entity.sender_id,
            sender_name: format!("{} {}", sender.first_name, sender.last_name),
            body_source: entity.body_source,
            body_html: entity.body_html,
            created_at: entity.created_at,
        }
    }

    /// Converts the message domain model to a DTO for API responses.
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            chat_id: self.chat_id,
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            body_source: self.body_source,
            body_html: self.body_html,
            created_at: self.created_at,
        }
    }
}

/// Parameters for opening (or re-opening) a chat.
#[derive(Debug, Clone)]
pub struct OpenChatParam {
    /// The adopter opening the chat; becomes a participant.
    pub creator_id: i32,
    pub rescue_id: i32,
    pub application_id: Option<i32>,
}

/// Parameters for posting a message to a chat.
#[derive(Debug, Clone)]
pub struct PostMessageParam {
    pub chat_id: i32,
    pub sender_id: i32,
    pub body_source: String,
    pub body_html: String,
}
