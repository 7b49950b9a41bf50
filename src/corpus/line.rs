use crate::models::MessageType;

/// Who speaks a scripted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// The current (demo) user.
    Me,
    /// Zero-based slot into the conversation's other participants.
    /// Slots past the roster clamp to the last available participant.
    Other(usize),
}

/// One hand-authored line of a scripted dialogue.
#[derive(Debug, Clone, Copy)]
pub struct FlowLine {
    pub speaker: Speaker,
    pub text: &'static str,
    pub kind: MessageType,
    /// Link this message to the immediately preceding one.
    pub reply_to_prev: bool,
}

impl FlowLine {
    pub const fn me(text: &'static str) -> Self {
        Self {
            speaker: Speaker::Me,
            text,
            kind: MessageType::Text,
            reply_to_prev: false,
        }
    }

    pub const fn other(slot: usize, text: &'static str) -> Self {
        Self {
            speaker: Speaker::Other(slot),
            text,
            kind: MessageType::Text,
            reply_to_prev: false,
        }
    }

    /// The single counterpart in a direct chat.
    pub const fn peer(text: &'static str) -> Self {
        Self::other(0, text)
    }

    pub const fn media(speaker: Speaker, kind: MessageType, text: &'static str) -> Self {
        Self {
            speaker,
            text,
            kind,
            reply_to_prev: false,
        }
    }

    pub const fn as_reply(mut self) -> Self {
        self.reply_to_prev = true;
        self
    }
}
