//! Identity & graph generation: users, conversations, participants.
//! Everything is an index-based formula; the same inputs always produce the
//! same graph.

use std::collections::HashSet;

use crate::corpus::people::{AVATAR_POOL, FIRST_NAMES, LAST_NAMES, STATUS_MESSAGES};
use crate::models::{Conversation, ConversationParticipant, ParticipantRole, User};

use super::{names, unread_override, CONVERSATION_COUNT, DAY, HOUR, MINUTE};

pub(crate) fn users(now: i64, count: usize) -> Vec<User> {
    let mut out = Vec::with_capacity(count);
    for i in 1..=count {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let last = LAST_NAMES[i % LAST_NAMES.len()];
        let is_online = i % 3 == 0;
        out.push(User {
            user_id: format!("user_{i}"),
            username: format!(
                "{}.{}{}",
                first.to_lowercase(),
                last.to_lowercase(),
                100 + i
            ),
            display_name: format!("{first} {last}"),
            avatar_url: Some(AVATAR_POOL[i % AVATAR_POOL.len()].to_string()),
            is_online,
            last_seen: if is_online { now } else { now - i as i64 * HOUR },
            status_message: STATUS_MESSAGES[i % STATUS_MESSAGES.len()].map(str::to_string),
        });
    }
    tracing::debug!(count = out.len(), "generated users");
    out
}

pub(crate) fn conversations(now: i64, users: &[User], current_user_id: &str) -> Vec<Conversation> {
    tracing::debug!(
        users = users.len(),
        current = current_user_id,
        "generating conversations"
    );
    let mut used_names = HashSet::new();
    let mut out = Vec::with_capacity(CONVERSATION_COUNT);
    for i in 1..=CONVERSATION_COUNT {
        let is_group = i % 3 == 0;
        // Guaranteed-unread conversations get a recent watermark so the
        // injected tail lands between it and "now"; everyone else gets an
        // older watermark that no generated message crosses.
        let last_viewed_at = if unread_override(i).is_some() {
            now - (30 + i as i64) * MINUTE
        } else {
            now - i as i64 * HOUR
        };
        let (title, avatar_url) = if is_group {
            let name = names::unique_group_name(names::group_name(i), &mut used_names);
            let avatar = names::group_avatar_url(&name, i);
            (Some(name), Some(avatar))
        } else {
            (None, None)
        };
        out.push(Conversation {
            conversation_id: format!("conv_{i}"),
            title,
            is_group,
            created_at: now - i as i64 * DAY,
            updated_at: now,
            unread_count: 0,
            is_pinned: false,
            is_muted: i % 10 == 0,
            avatar_url,
            last_viewed_at,
            last_message_preview: None,
            last_message_at: None,
        });
    }
    out
}

pub(crate) fn participants(
    conversations: &[Conversation],
    users: &[User],
    current_user_id: &str,
) -> Vec<ConversationParticipant> {
    let others: Vec<&User> = users.iter().filter(|u| u.user_id != current_user_id).collect();
    let mut out = Vec::new();
    for (idx, conv) in conversations.iter().enumerate() {
        let i = idx + 1;
        // Current user joins everything. The role formula tracks the index,
        // not actual admin semantics.
        out.push(ConversationParticipant {
            conversation_id: conv.conversation_id.clone(),
            user_id: current_user_id.to_string(),
            role: if i % 3 == 0 {
                ParticipantRole::Admin
            } else {
                ParticipantRole::Member
            },
            joined_at: conv.created_at,
        });
        if conv.is_group {
            let count = 2 + i % 6;
            let start = i.min(others.len());
            let end = (start + count).min(others.len());
            // Slice may run short for tiny user pools; degrade, don't wrap.
            for (k, user) in others[start..end].iter().enumerate() {
                out.push(ConversationParticipant {
                    conversation_id: conv.conversation_id.clone(),
                    user_id: user.user_id.clone(),
                    role: match k {
                        0 => ParticipantRole::Admin,
                        1 => ParticipantRole::Moderator,
                        _ => ParticipantRole::Member,
                    },
                    joined_at: conv.created_at + (k as i64 + 1) * HOUR,
                });
            }
        } else if let Some(user) = others.get(i - 1) {
            out.push(ConversationParticipant {
                conversation_id: conv.conversation_id.clone(),
                user_id: user.user_id.clone(),
                role: ParticipantRole::Member,
                joined_at: conv.created_at + HOUR,
            });
        }
    }
    tracing::debug!(count = out.len(), "generated participants");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_user_formulas() {
        let all = users(NOW, 10);
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].user_id, "user_1");
        // every third user is online and keeps last_seen at "now"
        assert!(all[2].is_online);
        assert_eq!(all[2].last_seen, NOW);
        // offline users drift back by an hour per index
        assert!(!all[1].is_online);
        assert_eq!(all[1].last_seen, NOW - 2 * HOUR);
    }

    #[test]
    fn test_usernames_are_unique() {
        let all = users(NOW, 100);
        let names: std::collections::HashSet<_> = all.iter().map(|u| &u.username).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_direct_conversations_have_no_title_or_avatar() {
        let us = users(NOW, 100);
        let convs = conversations(NOW, &us, "user_1");
        let direct = &convs[0]; // conv_1
        assert!(!direct.is_group);
        assert_eq!(direct.title, None);
        assert_eq!(direct.avatar_url, None);
    }

    #[test]
    fn test_every_tenth_conversation_is_muted() {
        let us = users(NOW, 100);
        let convs = conversations(NOW, &us, "user_1");
        assert!(convs[9].is_muted);
        assert!(!convs[10].is_muted);
        assert!(convs.iter().all(|c| !c.is_pinned));
    }

    #[test]
    fn test_group_other_count_follows_index() {
        let us = users(NOW, 100);
        let convs = conversations(NOW, &us, "user_1");
        let parts = participants(&convs, &us, "user_1");
        // conv_3: 2 + (3 % 6) = 5 others
        let conv3: Vec<_> = parts.iter().filter(|p| p.conversation_id == "conv_3").collect();
        assert_eq!(conv3.len(), 6);
        assert_eq!(conv3[0].user_id, "user_1");
        assert_eq!(conv3[1].role, ParticipantRole::Admin);
        assert_eq!(conv3[2].role, ParticipantRole::Moderator);
        assert_eq!(conv3[3].role, ParticipantRole::Member);
    }

    #[test]
    fn test_direct_other_is_offset_into_pool() {
        let us = users(NOW, 100);
        let convs = conversations(NOW, &us, "user_1");
        let parts = participants(&convs, &us, "user_1");
        // conv_1: offset 0 of the non-current pool == user_2
        let conv1: Vec<_> = parts.iter().filter(|p| p.conversation_id == "conv_1").collect();
        assert_eq!(conv1.len(), 2);
        assert_eq!(conv1[1].user_id, "user_2");
    }

    #[test]
    fn test_participant_underflow_degrades() {
        let us = users(NOW, 3);
        let convs = conversations(NOW, &us, "user_1");
        let parts = participants(&convs, &us, "user_1");
        // no panic; every conversation still has the current user
        for conv in &convs {
            assert!(parts
                .iter()
                .any(|p| p.conversation_id == conv.conversation_id && p.user_id == "user_1"));
        }
    }
}
