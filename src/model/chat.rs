use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChatDto {
    pub id: i32,
    pub rescue_id: i32,
    pub rescue_name: String,
    pub application_id: Option<i32>,
    pub participants: Vec<ChatParticipantDto>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

/// Participant with read-receipt state for rendering "seen" markers.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChatParticipantDto {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_read_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OpenChatDto {
    pub rescue_id: i32,
    pub application_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub chat_id: i32,
    pub sender_id: i32,
    pub sender_name: String,
    pub body_source: String,
    pub body_html: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostMessageDto {
    pub body: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChatListDto {
    pub chats: Vec<ChatDto>,
}

/// Users currently typing in a chat, excluding the caller.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TypingDto {
    pub user_ids: Vec<i32>,
}
