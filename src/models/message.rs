use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub message_id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    /// Epoch millis.
    pub timestamp: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub message_type: MessageType,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Seconds, for video/voice/audio.
    pub duration: Option<i64>,
    pub file_name: Option<String>,
    /// Bytes.
    pub file_size: Option<i64>,
    pub link_url: Option<String>,
    pub link_title: Option<String>,
    pub link_description: Option<String>,
    pub link_image_url: Option<String>,
    pub is_read: bool,
    pub is_delivered: bool,
    /// Back-reference only, never an ownership relation.
    pub reply_to_message_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "message_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Text,
    Image,
    Video,
    File,
    Gif,
    Sticker,
    VoiceNote,
    Location,
    Link,
    System,
    Audio,
}

impl Default for MessageType {
    fn default() -> Self {
        Self::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_field_serializes_as_type() {
        let message = Message {
            message_id: "msg_1".to_string(),
            conversation_id: "conv_1".to_string(),
            sender_id: "user_2".to_string(),
            content: "voice note".to_string(),
            timestamp: 1_700_000_000_000,
            message_type: MessageType::VoiceNote,
            media_url: None,
            thumbnail_url: None,
            duration: Some(12),
            file_name: None,
            file_size: None,
            link_url: None,
            link_title: None,
            link_description: None,
            link_image_url: None,
            is_read: true,
            is_delivered: true,
            reply_to_message_id: None,
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "voice_note");
        assert!(value.get("message_type").is_none());
    }
}
