use crate::{
    client::model::error::ApiError,
    model::chat::{ChatDto, ChatListDto, MessageDto, OpenChatDto, PostMessageDto, TypingDto},
};

use super::helper::{parse_empty_response, parse_response, send_request, ApiClient};

/// POST /api/v1/chats
/// Open (or return the existing) conversation with a rescue
pub async fn open_chat(client: &ApiClient, dto: OpenChatDto) -> Result<ChatDto, ApiError> {
    let response = send_request(client.post("/api/v1/chats").json(&dto)).await?;
    parse_response(response).await
}

/// GET /api/v1/chats
/// Get the caller's conversations, most recently active first
pub async fn get_chats(client: &ApiClient) -> Result<ChatListDto, ApiError> {
    let response = send_request(client.get("/api/v1/chats")).await?;
    parse_response(response).await
}

/// GET /api/v1/chats?rescue_id={rescue_id}
/// Get a rescue's conversations (staff)
pub async fn get_rescue_chats(client: &ApiClient, rescue_id: i32) -> Result<ChatListDto, ApiError> {
    let path = format!("/api/v1/chats?rescue_id={}", rescue_id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// GET /api/v1/chats/{id}
/// Get a conversation by ID (participants only)
pub async fn get_chat(client: &ApiClient, id: i32) -> Result<ChatDto, ApiError> {
    let path = format!("/api/v1/chats/{}", id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// GET /api/v1/chats/{id}/messages
/// Get messages, optionally only those newer than `after_id` for polling
pub async fn get_messages(
    client: &ApiClient,
    chat_id: i32,
    after_id: Option<i32>,
) -> Result<Vec<MessageDto>, ApiError> {
    let path = match after_id {
        Some(after_id) => format!("/api/v1/chats/{}/messages?after_id={}", chat_id, after_id),
        None => format!("/api/v1/chats/{}/messages", chat_id),
    };
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}

/// POST /api/v1/chats/{id}/messages
/// Send a markdown message to the conversation
pub async fn post_message(
    client: &ApiClient,
    chat_id: i32,
    body: &str,
) -> Result<MessageDto, ApiError> {
    let path = format!("/api/v1/chats/{}/messages", chat_id);
    let dto = PostMessageDto {
        body: body.to_string(),
    };
    let response = send_request(client.post(&path).json(&dto)).await?;
    parse_response(response).await
}

/// PUT /api/v1/chats/{id}/read
/// Update the caller's read receipt to now
pub async fn mark_read(client: &ApiClient, chat_id: i32) -> Result<(), ApiError> {
    let path = format!("/api/v1/chats/{}/read", chat_id);
    let response = send_request(client.put(&path)).await?;
    parse_empty_response(response).await
}

/// POST /api/v1/chats/{id}/typing
/// Signal that the caller is typing
pub async fn set_typing(client: &ApiClient, chat_id: i32) -> Result<(), ApiError> {
    let path = format!("/api/v1/chats/{}/typing", chat_id);
    let response = send_request(client.post(&path)).await?;
    parse_empty_response(response).await
}

/// GET /api/v1/chats/{id}/typing
/// Get the other participants currently typing
pub async fn get_typing(client: &ApiClient, chat_id: i32) -> Result<TypingDto, ApiError> {
    let path = format!("/api/v1/chats/{}/typing", chat_id);
    let response = send_request(client.get(&path)).await?;
    parse_response(response).await
}
