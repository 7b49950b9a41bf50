//! Post-generation summary pass: denormalized last-message preview and the
//! authoritative unread recomputation. Must run after every other step.

use crate::models::{Conversation, Message, MessageType};

/// Human-readable one-line preview for a message, keyed by type.
pub fn preview(message: &Message) -> String {
    match message.message_type {
        MessageType::Text | MessageType::Location | MessageType::System => {
            message.content.clone()
        }
        MessageType::Image => "📷 Photo".to_string(),
        MessageType::Video => "🎥 Video".to_string(),
        MessageType::Gif => "🎞️ GIF".to_string(),
        MessageType::Sticker => "😀 Sticker".to_string(),
        MessageType::VoiceNote => "🎤 Voice message".to_string(),
        MessageType::Audio => "🎵 Audio".to_string(),
        MessageType::File => {
            format!("📎 {}", message.file_name.as_deref().unwrap_or("File"))
        }
        MessageType::Link => match message.link_title.as_deref() {
            Some(title) => format!("🔗 {title}"),
            None => format!("🔗 {}", message.content),
        },
    }
}

/// Recompute per-conversation denormalized fields from the full message set.
/// The unread count computed here is authoritative; the zero written at
/// conversation-creation time is only a placeholder.
pub fn update_conversations_with_last_message(
    conversations: &[Conversation],
    messages: &[Message],
    current_user_id: &str,
) -> Vec<Conversation> {
    let updated: Vec<Conversation> = conversations
        .iter()
        .map(|conv| {
            let mut last: Option<&Message> = None;
            let mut unread = 0i64;
            for message in messages
                .iter()
                .filter(|m| m.conversation_id == conv.conversation_id)
            {
                // Later message wins timestamp ties.
                if last.map_or(true, |l| message.timestamp >= l.timestamp) {
                    last = Some(message);
                }
                if message.sender_id != current_user_id && message.timestamp > conv.last_viewed_at
                {
                    unread += 1;
                }
            }
            Conversation {
                unread_count: unread,
                last_message_preview: last.map(preview),
                last_message_at: last.map(|m| m.timestamp),
                ..conv.clone()
            }
        })
        .collect();
    tracing::debug!(
        conversations = updated.len(),
        "updated conversation summaries"
    );
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_message(id: &str, conv: &str, sender: &str, ts: i64, content: &str) -> Message {
        Message {
            message_id: id.to_string(),
            conversation_id: conv.to_string(),
            sender_id: sender.to_string(),
            content: content.to_string(),
            timestamp: ts,
            message_type: MessageType::Text,
            media_url: None,
            thumbnail_url: None,
            duration: None,
            file_name: None,
            file_size: None,
            link_url: None,
            link_title: None,
            link_description: None,
            link_image_url: None,
            is_read: true,
            is_delivered: true,
            reply_to_message_id: None,
        }
    }

    fn conversation(id: &str, last_viewed_at: i64) -> Conversation {
        Conversation {
            conversation_id: id.to_string(),
            title: None,
            is_group: false,
            created_at: 0,
            updated_at: 0,
            unread_count: 99,
            is_pinned: false,
            is_muted: false,
            avatar_url: None,
            last_viewed_at,
            last_message_preview: None,
            last_message_at: None,
        }
    }

    #[test]
    fn test_preview_per_type() {
        let mut msg = text_message("m1", "c1", "user_2", 10, "hello there");
        assert_eq!(preview(&msg), "hello there");

        msg.message_type = MessageType::Image;
        assert_eq!(preview(&msg), "📷 Photo");

        msg.message_type = MessageType::File;
        msg.file_name = Some("notes.pdf".to_string());
        assert_eq!(preview(&msg), "📎 notes.pdf");

        msg.message_type = MessageType::Link;
        msg.link_title = Some("Good read".to_string());
        assert_eq!(preview(&msg), "🔗 Good read");
    }

    #[test]
    fn test_unread_counts_only_others_past_watermark() {
        let conv = conversation("c1", 100);
        let messages = vec![
            text_message("m1", "c1", "user_2", 90, "before watermark"),
            text_message("m2", "c1", "user_1", 150, "mine, after watermark"),
            text_message("m3", "c1", "user_2", 160, "unread"),
            text_message("m4", "c1", "user_3", 170, "unread too"),
        ];
        let updated = update_conversations_with_last_message(&[conv], &messages, "user_1");
        assert_eq!(updated[0].unread_count, 2);
        assert_eq!(updated[0].last_message_at, Some(170));
        assert_eq!(updated[0].last_message_preview.as_deref(), Some("unread too"));
    }

    #[test]
    fn test_empty_conversation_resets_placeholder() {
        let conv = conversation("c1", 100);
        let updated = update_conversations_with_last_message(&[conv], &[], "user_1");
        assert_eq!(updated[0].unread_count, 0);
        assert_eq!(updated[0].last_message_preview, None);
        assert_eq!(updated[0].last_message_at, None);
    }
}
