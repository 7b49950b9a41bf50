//! Deterministic demo-data generator. Fabricates a self-consistent social
//! graph (users, conversations, participants) and per-conversation message
//! streams with scripted dialogues, a guaranteed-unread tail for a fixed set
//! of conversations, and denormalized conversation summaries.
//!
//! The whole pipeline is a pure function of (`now`, id factory, inputs);
//! repeated runs produce identical output.

pub mod ids;
pub mod names;
pub mod summary;

mod flows;
mod group_flows;
mod identity;
mod unread;

use chrono::Utc;

use crate::corpus::media::{
    AUDIO_URLS, FILE_NAMES, GIF_URLS, IMAGE_URLS, LINKS, STICKER_URLS, VIDEO_URLS,
};
use crate::corpus::Speaker;
use crate::models::{Conversation, ConversationParticipant, Message, MessageType, User};

pub use ids::{MessageIdFactory, SequentialIds, UuidIds};
pub use summary::update_conversations_with_last_message;

pub(crate) const MINUTE: i64 = 60_000;
pub(crate) const HOUR: i64 = 3_600_000;
pub(crate) const DAY: i64 = 86_400_000;

/// Every run produces exactly this many conversations.
pub const CONVERSATION_COUNT: usize = 50;

/// Conversations engineered to end with a specific number of unread
/// messages, for demo purposes: (conversation index, unread count).
pub const UNREAD_OVERRIDES: &[(usize, usize)] = &[(1, 2), (2, 5), (3, 15), (7, 1), (12, 3)];

/// Spacing of injected unread messages past the watermark.
const DIRECT_UNREAD_STEP: i64 = 60_000;
const GROUP_UNREAD_STEP: i64 = 45_000;

pub(crate) fn unread_override(index: usize) -> Option<usize> {
    UNREAD_OVERRIDES
        .iter()
        .find(|(i, _)| *i == index)
        .map(|(_, n)| *n)
}

/// Everything one generation run produces. `conversations` already carries
/// the recomputed summaries when built via [`ChatDataGenerator::generate_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemoDataset {
    pub users: Vec<User>,
    pub conversations: Vec<Conversation>,
    pub participants: Vec<ConversationParticipant>,
    pub messages: Vec<Message>,
}

pub struct ChatDataGenerator {
    now: i64,
    ids: Box<dyn MessageIdFactory>,
}

impl Default for ChatDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatDataGenerator {
    pub fn new() -> Self {
        Self::with_parts(Utc::now().timestamp_millis(), Box::new(UuidIds))
    }

    /// Fix the generation instant and id factory, for reproducible runs.
    pub fn with_parts(now: i64, ids: Box<dyn MessageIdFactory>) -> Self {
        Self { now, ids }
    }

    pub fn generate_users(&self, count: usize) -> Vec<User> {
        identity::users(self.now, count)
    }

    pub fn generate_conversations(
        &self,
        users: &[User],
        current_user_id: &str,
    ) -> Vec<Conversation> {
        identity::conversations(self.now, users, current_user_id)
    }

    pub fn generate_participants(
        &self,
        conversations: &[Conversation],
        users: &[User],
        current_user_id: &str,
    ) -> Vec<ConversationParticipant> {
        identity::participants(conversations, users, current_user_id)
    }

    /// Per-conversation message streams. Guaranteed-unread conversations get
    /// `per_conversation − n` regular messages (all timestamped strictly
    /// before the watermark) plus `n` injected messages strictly after it,
    /// so every conversation totals `per_conversation`.
    pub fn generate_messages(
        &mut self,
        conversations: &[Conversation],
        participants: &[ConversationParticipant],
        current_user_id: &str,
        per_conversation: usize,
    ) -> Vec<Message> {
        let mut messages = Vec::with_capacity(conversations.len() * per_conversation);
        for (idx, conv) in conversations.iter().enumerate() {
            let index = idx + 1;
            let others: Vec<&str> = participants
                .iter()
                .filter(|p| {
                    p.conversation_id == conv.conversation_id && p.user_id != current_user_id
                })
                .map(|p| p.user_id.as_str())
                .collect();

            let unread = unread_override(index);
            let target = per_conversation.saturating_sub(unread.unwrap_or(0));
            let lines = if conv.is_group {
                group_flows::group_flow(
                    index,
                    conv.title.as_deref().unwrap_or(""),
                    target,
                    unread.is_some(),
                    &others,
                )
            } else {
                flows::direct_flow(index, target)
            };

            let total = lines.len() as i64;
            let mut prev_id: Option<String> = None;
            for (slot, line) in lines.iter().enumerate() {
                let sender = match line.speaker {
                    Speaker::Me => current_user_id,
                    // Slots past the roster clamp to the last participant;
                    // an empty roster falls back to the current user.
                    Speaker::Other(s) if !others.is_empty() => {
                        others[s.min(others.len() - 1)]
                    }
                    Speaker::Other(_) => current_user_id,
                };
                let mut message = Message {
                    message_id: self.ids.next_id(),
                    conversation_id: conv.conversation_id.clone(),
                    sender_id: sender.to_string(),
                    content: line.text.clone(),
                    timestamp: conv.last_viewed_at - (total - slot as i64) * MINUTE,
                    message_type: line.kind,
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
                    reply_to_message_id: if line.reply_to_prev {
                        prev_id.clone()
                    } else {
                        None
                    },
                };
                decorate_media(&mut message, slot);
                prev_id = Some(message.message_id.clone());
                messages.push(message);
            }

            if let Some(n) = unread {
                self.inject_unread(conv, index, n, &others, prev_id, &mut messages);
            }
        }
        tracing::info!(count = messages.len(), "generated messages");
        messages
    }

    /// Append the guaranteed-unread tail: `n` messages from other
    /// participants, strictly after the watermark, unread but delivered.
    fn inject_unread(
        &mut self,
        conv: &Conversation,
        index: usize,
        n: usize,
        others: &[&str],
        last_flow_id: Option<String>,
        messages: &mut Vec<Message>,
    ) {
        if others.is_empty() {
            tracing::warn!(
                conversation = %conv.conversation_id,
                "no other participants, skipping unread injection"
            );
            return;
        }
        let step = if conv.is_group {
            GROUP_UNREAD_STEP
        } else {
            DIRECT_UNREAD_STEP
        };
        let lines = unread::unread_lines(index, conv.title.as_deref(), n);
        for (k, text) in lines.into_iter().enumerate() {
            messages.push(Message {
                message_id: self.ids.next_id(),
                conversation_id: conv.conversation_id.clone(),
                sender_id: others[k % others.len()].to_string(),
                content: text.to_string(),
                timestamp: conv.last_viewed_at + (k as i64 + 1) * step,
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
                is_read: false,
                is_delivered: true,
                reply_to_message_id: if k == 0 { last_flow_id.clone() } else { None },
            });
        }
    }

    /// Run the full pipeline in its required order. The returned
    /// conversations carry the recomputed summaries and are the ones to
    /// persist.
    pub fn generate_all(
        &mut self,
        user_count: usize,
        per_conversation: usize,
        current_user_id: &str,
    ) -> DemoDataset {
        let users = self.generate_users(user_count);
        let conversations = self.generate_conversations(&users, current_user_id);
        let participants = self.generate_participants(&conversations, &users, current_user_id);
        let messages =
            self.generate_messages(&conversations, &participants, current_user_id, per_conversation);
        let conversations =
            update_conversations_with_last_message(&conversations, &messages, current_user_id);
        DemoDataset {
            users,
            conversations,
            participants,
            messages,
        }
    }
}

/// Fill type-specific fields from the media pools, keyed by slot so the
/// choice is stable across runs.
fn decorate_media(message: &mut Message, slot: usize) {
    match message.message_type {
        MessageType::Image => {
            message.media_url = Some(IMAGE_URLS[slot % IMAGE_URLS.len()].to_string());
            message.thumbnail_url = Some(IMAGE_URLS[slot % IMAGE_URLS.len()].to_string());
        }
        MessageType::Video => {
            message.media_url = Some(VIDEO_URLS[slot % VIDEO_URLS.len()].to_string());
            message.thumbnail_url = Some(IMAGE_URLS[slot % IMAGE_URLS.len()].to_string());
            message.duration = Some(15 + (slot as i64 % 90));
        }
        MessageType::Gif => {
            message.media_url = Some(GIF_URLS[slot % GIF_URLS.len()].to_string());
        }
        MessageType::Sticker => {
            message.media_url = Some(STICKER_URLS[slot % STICKER_URLS.len()].to_string());
        }
        MessageType::VoiceNote => {
            message.media_url = Some(AUDIO_URLS[slot % AUDIO_URLS.len()].to_string());
            message.duration = Some(5 + (slot as i64 % 55));
        }
        MessageType::Audio => {
            message.media_url = Some(AUDIO_URLS[slot % AUDIO_URLS.len()].to_string());
            message.duration = Some(30 + (slot as i64 % 180));
        }
        MessageType::File => {
            message.file_name = Some(FILE_NAMES[slot % FILE_NAMES.len()].to_string());
            message.file_size = Some(51_200 + (slot as i64 + 1) * 24_576);
        }
        MessageType::Link => {
            let (url, title, description, image) = LINKS[slot % LINKS.len()];
            message.link_url = Some(url.to_string());
            message.link_title = Some(title.to_string());
            message.link_description = Some(description.to_string());
            message.link_image_url = Some(image.to_string());
        }
        MessageType::Text | MessageType::Location | MessageType::System => {}
    }
}
