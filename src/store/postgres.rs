use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{Conversation, ConversationParticipant, Message, User};

use super::ChatStore;

pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChatStore for PgStore {
    async fn clear_all(&self) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        // Children before parents.
        sqlx::query("DELETE FROM messages").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM participants")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM conversations")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!("cleared previous demo data");
        Ok(())
    }

    async fn insert_users(&self, users: &[User]) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        for user in users {
            sqlx::query(
                r#"
                INSERT INTO users (user_id, username, display_name, avatar_url, is_online, last_seen, status_message)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(&user.user_id)
            .bind(&user.username)
            .bind(&user.display_name)
            .bind(&user.avatar_url)
            .bind(user.is_online)
            .bind(user.last_seen)
            .bind(&user.status_message)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        tracing::info!(count = users.len(), "inserted users");
        Ok(())
    }

    async fn insert_conversations(&self, conversations: &[Conversation]) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        for conv in conversations {
            sqlx::query(
                r#"
                INSERT INTO conversations (
                    conversation_id, title, is_group, created_at, updated_at,
                    unread_count, is_pinned, is_muted, avatar_url, last_viewed_at,
                    last_message_preview, last_message_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(&conv.conversation_id)
            .bind(&conv.title)
            .bind(conv.is_group)
            .bind(conv.created_at)
            .bind(conv.updated_at)
            .bind(conv.unread_count)
            .bind(conv.is_pinned)
            .bind(conv.is_muted)
            .bind(&conv.avatar_url)
            .bind(conv.last_viewed_at)
            .bind(&conv.last_message_preview)
            .bind(conv.last_message_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        tracing::info!(count = conversations.len(), "inserted conversations");
        Ok(())
    }

    async fn insert_participants(
        &self,
        participants: &[ConversationParticipant],
    ) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        for participant in participants {
            sqlx::query(
                r#"
                INSERT INTO participants (conversation_id, user_id, role, joined_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&participant.conversation_id)
            .bind(&participant.user_id)
            .bind(participant.role)
            .bind(participant.joined_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        tracing::info!(count = participants.len(), "inserted participants");
        Ok(())
    }

    async fn insert_messages(&self, messages: &[Message]) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        for message in messages {
            sqlx::query(
                r#"
                INSERT INTO messages (
                    message_id, conversation_id, sender_id, content, timestamp, type,
                    media_url, thumbnail_url, duration, file_name, file_size,
                    link_url, link_title, link_description, link_image_url,
                    is_read, is_delivered, reply_to_message_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
                "#,
            )
            .bind(&message.message_id)
            .bind(&message.conversation_id)
            .bind(&message.sender_id)
            .bind(&message.content)
            .bind(message.timestamp)
            .bind(message.message_type)
            .bind(&message.media_url)
            .bind(&message.thumbnail_url)
            .bind(message.duration)
            .bind(&message.file_name)
            .bind(message.file_size)
            .bind(&message.link_url)
            .bind(&message.link_title)
            .bind(&message.link_description)
            .bind(&message.link_image_url)
            .bind(message.is_read)
            .bind(message.is_delivered)
            .bind(&message.reply_to_message_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        tracing::info!(count = messages.len(), "inserted messages");
        Ok(())
    }
}
