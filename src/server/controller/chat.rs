use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatDto, ChatListDto, MessageDto, OpenChatDto, PostMessageDto, TypingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::chat::OpenChatParam,
        service::chat::ChatService,
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Query parameters for the chat listing.
#[derive(Deserialize)]
pub struct ChatQueryParam {
    /// When set, lists every chat at the rescue instead of the caller's own.
    pub rescue_id: Option<i32>,
}

/// Query parameters for message polling.
#[derive(Deserialize)]
pub struct MessageQueryParam {
    /// Only return messages with an id greater than this.
    pub after_id: Option<i32>,
}

/// Open a chat with a rescue.
///
/// Idempotent per (caller, rescue, application): re-opening returns the
/// existing chat. The caller becomes a participant. When `application_id`
/// is set, the application must be the caller's own and must belong to a
/// pet of the rescue.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/v1/chats",
    tag = CHAT_TAG,
    request_body = OpenChatDto,
    responses(
        (status = 201, description = "The chat, new or existing", body = ChatDto),
        (status = 400, description = "Application does not match rescue or caller", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such rescue or application", body = ErrorDto)
    ),
)]
pub async fn open_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<OpenChatDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let chat = ChatService::new(&state.db, &state.typing)
        .open(OpenChatParam {
            creator_id: caller.id,
            rescue_id: payload.rescue_id,
            application_id: payload.application_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(chat.into_dto())))
}

/// List chats.
///
/// Without `rescue_id`, lists the chats the caller participates in. With
/// `rescue_id`, lists every chat at the rescue (staff only), including
/// chats the caller has not joined yet. Most recently active first.
///
/// # Access Control
/// - Own chats: any authenticated user
/// - `ReviewApplications` - For the `rescue_id` variant
#[utoipa::path(
    get,
    path = "/api/v1/chats",
    tag = CHAT_TAG,
    params(
        ("rescue_id" = Option<i32>, Query, description = "List a rescue's chats (staff only)")
    ),
    responses(
        (status = 200, description = "Chats", body = ChatListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff of this rescue", body = ErrorDto)
    ),
)]
pub async fn get_chats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ChatQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let service = ChatService::new(&state.db, &state.typing);

    let chats = match params.rescue_id {
        Some(rescue_id) => {
            let _ = guard
                .require(&[Permission::ReviewApplications(rescue_id)])
                .await?;
            service.get_chats_for_rescue(rescue_id).await?
        }
        None => {
            let caller = guard.require(&[]).await?;
            service.get_chats(caller.id).await?
        }
    };

    Ok((
        StatusCode::OK,
        Json(ChatListDto {
            chats: chats.into_iter().map(|chat| chat.into_dto()).collect(),
        }),
    ))
}

/// Get a single chat.
///
/// Participants and staff of the chat's rescue may read it; staff joining
/// for the first time get a participant row so their read receipts work.
///
/// # Access Control
/// - Participants, or staff of the chat's rescue
#[utoipa::path(
    get,
    path = "/api/v1/chats/{id}",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 200, description = "The chat", body = ChatDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such chat, or not accessible", body = ErrorDto)
    ),
)]
pub async fn get_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let chat = ChatService::new(&state.db, &state.typing)
        .get_chat(id, caller.id)
        .await?;

    Ok((StatusCode::OK, Json(chat.into_dto())))
}

/// Poll a chat's messages.
///
/// Returns messages in posting order. Pass `after_id` with the last seen
/// message id to fetch only newer messages.
///
/// # Access Control
/// - Participants, or staff of the chat's rescue
#[utoipa::path(
    get,
    path = "/api/v1/chats/{id}/messages",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Chat ID"),
        ("after_id" = Option<i32>, Query, description = "Only messages newer than this ID")
    ),
    responses(
        (status = 200, description = "Messages, oldest first", body = Vec<MessageDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such chat, or not accessible", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<MessageQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let messages = ChatService::new(&state.db, &state.typing)
        .get_messages(id, caller.id, params.after_id)
        .await?;
    let messages_dto: Vec<_> = messages
        .into_iter()
        .map(|message| message.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(messages_dto)))
}

/// Post a message to a chat.
///
/// The markdown body is sanitized and rendered at write time.
///
/// # Access Control
/// - Participants, or staff of the chat's rescue
#[utoipa::path(
    post,
    path = "/api/v1/chats/{id}/messages",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Chat ID")
    ),
    request_body = PostMessageDto,
    responses(
        (status = 201, description = "The stored message", body = MessageDto),
        (status = 400, description = "Empty message body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such chat, or not accessible", body = ErrorDto)
    ),
)]
pub async fn post_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PostMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let message = ChatService::new(&state.db, &state.typing)
        .post_message(id, caller.id, &payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Mark a chat as read.
///
/// Sets the caller's read receipt to now; other participants see it on the
/// chat's participant list.
///
/// # Access Control
/// - Participants, or staff of the chat's rescue
#[utoipa::path(
    put,
    path = "/api/v1/chats/{id}/read",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 204, description = "Read receipt updated"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such chat, or not accessible", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    ChatService::new(&state.db, &state.typing)
        .mark_read(id, caller.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Signal that the caller is typing.
///
/// The indicator expires on its own after a few seconds; clients repeat
/// the call while the user keeps typing. Never persisted.
///
/// # Access Control
/// - Participants, or staff of the chat's rescue
#[utoipa::path(
    post,
    path = "/api/v1/chats/{id}/typing",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 204, description = "Typing indicator set"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such chat, or not accessible", body = ErrorDto)
    ),
)]
pub async fn set_typing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    ChatService::new(&state.db, &state.typing)
        .set_typing(id, caller.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List who is typing in a chat.
///
/// Excludes the caller.
///
/// # Access Control
/// - Participants, or staff of the chat's rescue
#[utoipa::path(
    get,
    path = "/api/v1/chats/{id}/typing",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 200, description = "User IDs currently typing", body = TypingDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such chat, or not accessible", body = ErrorDto)
    ),
)]
pub async fn get_typing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let user_ids = ChatService::new(&state.db, &state.typing)
        .typing_users(id, caller.id)
        .await?;

    Ok((StatusCode::OK, Json(TypingDto { user_ids })))
}
