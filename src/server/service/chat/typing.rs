//! Ephemeral typing indicators.
//!
//! Typing state never touches the database. A participant's indicator lives
//! in memory for six seconds after their last keystroke signal and then
//! disappears on its own; clients refresh it while the user keeps typing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// How long a typing signal stays visible without a refresh.
const TYPING_TTL: Duration = Duration::from_secs(6);

/// Service tracking who is typing in which chat.
#[derive(Clone)]
pub struct TypingService {
    typing: Arc<RwLock<HashMap<(i32, i32), Instant>>>,
}

impl TypingService {
    /// Creates a new TypingService instance.
    pub fn new() -> Self {
        Self {
            typing: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records that a user is typing in a chat, refreshing any earlier signal.
    pub async fn set_typing(&self, chat_id: i32, user_id: i32) {
        let mut typing = self.typing.write().await;
        typing.insert((chat_id, user_id), Instant::now() + TYPING_TTL);
    }

    /// Lists the users currently typing in a chat.
    ///
    /// Expired entries across all chats are pruned as a side effect.
    pub async fn typing_users(&self, chat_id: i32) -> Vec<i32> {
        let mut typing = self.typing.write().await;
        let now = Instant::now();
        typing.retain(|_, expires_at| *expires_at > now);

        let mut user_ids: Vec<i32> = typing
            .keys()
            .filter(|(chat, _)| *chat == chat_id)
            .map(|(_, user)| *user)
            .collect();
        user_ids.sort_unstable();
        user_ids
    }

    /// Forces a user's typing signal to expire immediately.
    #[cfg(test)]
    pub async fn force_expire(&self, chat_id: i32, user_id: i32) {
        let mut typing = self.typing.write().await;
        if let Some(expires_at) = typing.get_mut(&(chat_id, user_id)) {
            *expires_at = Instant::now();
        }
    }
}

impl Default for TypingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn typing_signal_is_visible() {
        let service = TypingService::new();
        service.set_typing(1, 10).await;

        assert_eq!(service.typing_users(1).await, vec![10]);
    }

    #[tokio::test]
    async fn signals_are_scoped_per_chat() {
        let service = TypingService::new();
        service.set_typing(1, 10).await;
        service.set_typing(2, 20).await;

        assert_eq!(service.typing_users(1).await, vec![10]);
        assert_eq!(service.typing_users(2).await, vec![20]);
    }

    #[tokio::test]
    async fn expired_signals_disappear() {
        let service = TypingService::new();
        service.set_typing(1, 10).await;
        service.force_expire(1, 10).await;

        assert!(service.typing_users(1).await.is_empty());
    }

    #[tokio::test]
    async fn refresh_extends_the_signal() {
        let service = TypingService::new();
        service.set_typing(1, 10).await;
        service.force_expire(1, 10).await;
        service.set_typing(1, 10).await;

        assert_eq!(service.typing_users(1).await, vec![10]);
    }

    #[tokio::test]
    async fn multiple_users_in_one_chat() {
        let service = TypingService::new();
        service.set_typing(1, 30).await;
        service.set_typing(1, 10).await;
        service.set_typing(1, 20).await;

        assert_eq!(service.typing_users(1).await, vec![10, 20, 30]);
    }
}
