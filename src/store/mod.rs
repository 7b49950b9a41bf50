pub mod postgres;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Conversation, ConversationParticipant, Message, User};

/// Persistence boundary for a regeneration run. A run either fully replaces
/// the prior dataset (clear, then insert everything) or is retried wholesale;
/// there is no incremental mode.
#[async_trait]
pub trait ChatStore {
    async fn clear_all(&self) -> AppResult<()>;
    async fn insert_users(&self, users: &[User]) -> AppResult<()>;
    async fn insert_conversations(&self, conversations: &[Conversation]) -> AppResult<()>;
    async fn insert_participants(
        &self,
        participants: &[ConversationParticipant],
    ) -> AppResult<()>;
    async fn insert_messages(&self, messages: &[Message]) -> AppResult<()>;
}
