//! Group-chat flow assembly: themed script by title keywords, filler scenes
//! to length, and an unread-tail filter that keeps the closing slots free of
//! current-user messages for guaranteed-unread conversations.

use crate::corpus::group_flows::{
    CONTEXT_TOPICS, DEFAULT_CONTEXT_TOPIC, FILLER_SCENES, GENERIC_GROUP_FLOW, GROUP_FLOW_RULES,
};
use crate::corpus::{FlowLine, Speaker};
use crate::models::MessageType;

use super::flows::{variety_kind, Line};
use super::names::string_hash;

/// Number of trailing slots kept free of current-user lines when the
/// conversation is engineered to have unread messages.
const UNREAD_TAIL: usize = 10;

fn themed_script(title: &str) -> &'static [FlowLine] {
    let lower = title.to_lowercase();
    for (keywords, flow) in GROUP_FLOW_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *flow;
        }
    }
    GENERIC_GROUP_FLOW
}

/// Contextual text for a generic slot: topic row by title keywords, short or
/// long variant by a fixed modulo pattern.
fn contextual_text(title: &str, slot: usize) -> &'static str {
    let lower = title.to_lowercase();
    let (short, long) = CONTEXT_TOPICS
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, short, long)| (*short, *long))
        .unwrap_or(DEFAULT_CONTEXT_TOPIC);
    if slot % 3 == 0 {
        long[(slot / 3) % long.len()]
    } else {
        short[slot % short.len()]
    }
}

/// One generated line for the type-variety path, optionally prefixed with an
/// `@mention` of a participant picked by content length.
pub(crate) fn contextual_line(
    title: &str,
    slot: usize,
    others: &[&str],
    allow_current_user: bool,
) -> Line {
    let speaker = if allow_current_user && slot % 3 == 0 {
        Speaker::Me
    } else if others.is_empty() {
        Speaker::Me
    } else {
        Speaker::Other(slot % others.len())
    };
    let kind = variety_kind(slot);
    let base = contextual_text(title, slot);
    let text = if kind == MessageType::Text
        && !others.is_empty()
        && string_hash(base).rem_euclid(5) == 0
    {
        format!("@{} {}", others[base.len() % others.len()], base)
    } else {
        base.to_string()
    };
    Line {
        speaker,
        text,
        kind,
        reply_to_prev: false,
    }
}

pub(crate) fn group_flow(
    index: usize,
    title: &str,
    target: usize,
    guaranteed_unread: bool,
    others: &[&str],
) -> Vec<Line> {
    let mut lines: Vec<Line> = themed_script(title).iter().map(Line::from).collect();

    while lines.len() < target {
        let scene = FILLER_SCENES[(index + lines.len()) % FILLER_SCENES.len()];
        lines.extend(scene.iter().map(Line::from));
    }
    lines.truncate(target);

    if guaranteed_unread && target > 0 {
        // The unread tail should read as the other members talking while the
        // current user is away.
        let head_len = target.saturating_sub(UNREAD_TAIL);
        let mut tail: Vec<Line> = lines
            .split_off(head_len)
            .into_iter()
            .filter(|l| l.speaker != Speaker::Me)
            .collect();
        while lines.len() + tail.len() < target {
            let slot = lines.len() + tail.len();
            tail.push(contextual_line(title, slot, others, false));
        }
        lines.append(&mut tail);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const OTHERS: &[&str] = &["user_4", "user_5", "user_6"];

    #[test]
    fn test_group_flow_hits_exact_target() {
        for index in [3, 6, 9, 12, 48] {
            for target in [0, 5, 35, 50] {
                let lines = group_flow(index, "Study Buddies", target, false, OTHERS);
                assert_eq!(lines.len(), target);
                let lines = group_flow(index, "Study Buddies", target, true, OTHERS);
                assert_eq!(lines.len(), target);
            }
        }
    }

    #[test]
    fn test_themed_dispatch_order() {
        // "best friend" must win over the broader "friend" rule
        let best = themed_script("Best Friends 💯");
        let friends = themed_script("College Friends");
        assert_eq!(best[0].text, "GUYS. Big news");
        assert_eq!(friends[0].text, "Who's free Friday? Thinking bowling");
        // unknown titles fall back to the generic script
        let generic = themed_script("Completely Unrelated");
        assert_eq!(generic.len(), GENERIC_GROUP_FLOW.len());
        assert_eq!(generic[0].text, GENERIC_GROUP_FLOW[0].text);
    }

    #[test]
    fn test_unread_tail_excludes_current_user() {
        let lines = group_flow(3, "Study Buddies", 35, true, OTHERS);
        for line in &lines[25..] {
            assert_ne!(line.speaker, Speaker::Me);
        }
    }

    #[test]
    fn test_positional_speakers_survive_empty_roster() {
        // No other participants at all: assembly must not panic.
        let lines = group_flow(12, "Gym Rats 💪", 20, true, &[]);
        assert_eq!(lines.len(), 20);
    }

    #[test]
    fn test_unmatched_title_falls_back_to_default_topic() {
        // slot 4 is a text slot; no topic row matches this title
        let line = contextual_line("Completely Unrelated", 4, OTHERS, true);
        let expected = DEFAULT_CONTEXT_TOPIC.0[4 % DEFAULT_CONTEXT_TOPIC.0.len()];
        assert!(line.text.ends_with(expected), "got {}", line.text);
    }

    #[test]
    fn test_contextual_text_is_title_aware() {
        let line = contextual_line("Gym Rats 💪", 4, OTHERS, true);
        // slot 4 is a text slot; fitness topic row supplies the content
        assert_eq!(line.kind, MessageType::Text);
    }
}
