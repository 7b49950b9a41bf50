use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    pub conversation_id: String,
    /// None for direct chats, themed name (possibly with emoji) for groups.
    pub title: Option<String>,
    pub is_group: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// Placeholder zero until the summary pass recomputes it.
    pub unread_count: i64,
    pub is_pinned: bool,
    pub is_muted: bool,
    pub avatar_url: Option<String>,
    /// Watermark: messages after this from other users count as unread.
    pub last_viewed_at: i64,
    pub last_message_preview: Option<String>,
    pub last_message_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ConversationParticipant {
    pub conversation_id: String,
    pub user_id: String,
    pub role: ParticipantRole,
    pub joined_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "participant_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Admin,
    Moderator,
    Member,
}
