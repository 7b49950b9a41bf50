//! Direct-chat flow assembly: scripted seed dialogue, topic-mixed
//! continuation, closing exchange, then type-varied filler, truncated to the
//! exact target count.

use crate::corpus::direct_flows::{
    CLOSING_SCRIPTS, CONTINUATION_CLOSER, DIRECT_FLOWS, GENERIC_FILLERS, TOPIC_BLOCKS, TRANSITIONS,
};
use crate::corpus::{FlowLine, Speaker};
use crate::models::MessageType;

/// Owned, fully-resolved line ready to become a message.
#[derive(Debug, Clone)]
pub(crate) struct Line {
    pub speaker: Speaker,
    pub text: String,
    pub kind: MessageType,
    pub reply_to_prev: bool,
}

impl From<&FlowLine> for Line {
    fn from(line: &FlowLine) -> Self {
        Self {
            speaker: line.speaker,
            text: line.text.to_string(),
            kind: line.kind,
            reply_to_prev: line.reply_to_prev,
        }
    }
}

/// Message type for a generic slot: a fixed modulo pattern injecting media
/// variety into otherwise text-only padding.
pub(crate) fn variety_kind(slot: usize) -> MessageType {
    match slot % 10 {
        0 => MessageType::Image,
        1 => MessageType::Video,
        2 => MessageType::Sticker,
        3 => MessageType::Gif,
        9 => MessageType::VoiceNote,
        _ => MessageType::Text,
    }
}

pub(crate) fn direct_flow(index: usize, target: usize) -> Vec<Line> {
    let mut lines: Vec<Line> = DIRECT_FLOWS[index % DIRECT_FLOWS.len()]
        .iter()
        .map(Line::from)
        .collect();

    if lines.len() < target {
        // Mix 2-3 topic blocks, each introduced by a transition line.
        let blocks = 2 + index % 2;
        let start = index % TOPIC_BLOCKS.len();
        for b in 0..blocks {
            lines.push(Line::from(&TRANSITIONS[(index + b) % TRANSITIONS.len()]));
            lines.extend(
                TOPIC_BLOCKS[(start + b) % TOPIC_BLOCKS.len()]
                    .iter()
                    .map(Line::from),
            );
        }
        lines.extend(CONTINUATION_CLOSER.iter().map(Line::from));
    }

    if lines.len() < target {
        lines.extend(
            CLOSING_SCRIPTS[index % CLOSING_SCRIPTS.len()]
                .iter()
                .map(Line::from),
        );
    }

    while lines.len() < target {
        let slot = lines.len();
        lines.push(Line {
            speaker: if slot % 2 == 0 {
                Speaker::Me
            } else {
                Speaker::Other(0)
            },
            text: GENERIC_FILLERS[(index + slot) % GENERIC_FILLERS.len()].to_string(),
            kind: variety_kind(slot),
            reply_to_prev: false,
        });
    }

    lines.truncate(target);
    lines
}
